use std::sync::Mutex;

use crate::domain::blog::{BlogPost, NewBlogPost};
use crate::domain::errors::DomainError;

#[derive(Debug)]
struct BlogStore {
    posts: Vec<BlogPost>,
    next_id: u64,
}

pub struct BlogService {
    store: Mutex<BlogStore>,
}

impl Default for BlogService {
    fn default() -> Self {
        Self::new()
    }
}

impl BlogService {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(BlogStore {
                posts: Vec::new(),
                next_id: 1,
            }),
        }
    }

    pub fn create(&self, post: NewBlogPost) -> Result<BlogPost, DomainError> {
        let mut store = self
            .store
            .lock()
            .map_err(|e| DomainError::Internal(format!("blog lock poisoned: {}", e)))?;

        let created = BlogPost {
            id: store.next_id,
            title: post.title,
            content: post.content,
            author: post.author,
        };
        store.next_id += 1;
        store.posts.push(created.clone());

        log::info!("blog post {} created", created.id);
        Ok(created)
    }

    pub fn list(&self) -> Result<Vec<BlogPost>, DomainError> {
        self.store
            .lock()
            .map(|s| s.posts.clone())
            .map_err(|e| DomainError::Internal(format!("blog lock poisoned: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> NewBlogPost {
        NewBlogPost {
            title: title.to_string(),
            content: "body".to_string(),
            author: None,
        }
    }

    #[test]
    fn ids_start_at_one_and_increase() {
        let svc = BlogService::new();
        let first = svc.create(draft("first")).expect("create failed");
        let second = svc.create(draft("second")).expect("create failed");

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn list_returns_posts_in_creation_order() {
        let svc = BlogService::new();
        svc.create(draft("a")).expect("create failed");
        svc.create(draft("b")).expect("create failed");

        let titles: Vec<String> = svc
            .list()
            .expect("list failed")
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["a", "b"]);
    }
}
