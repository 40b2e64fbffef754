/// A signed-up login. The password is accepted at signup but never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub username: String,
    pub name: Option<String>,
}
