use super::errors::DomainError;

pub const NAME_MIN_LEN: usize = 5;
pub const EMAIL_MAX_LEN: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewProfile {
    pub name: String,
    pub email: String,
    pub image: Option<String>,
}

/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
}

impl NewProfile {
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_name(&self.name)?;
        validate_email(&self.email)
    }
}

impl ProfilePatch {
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        Ok(())
    }

    pub fn apply(self, profile: &mut Profile) {
        if let Some(name) = self.name {
            profile.name = name;
        }
        if let Some(email) = self.email {
            profile.email = email;
        }
        if let Some(image) = self.image {
            profile.image = Some(image);
        }
    }
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.chars().count() < NAME_MIN_LEN {
        return Err(DomainError::InvalidInput(format!(
            "name must be at least {} characters",
            NAME_MIN_LEN
        )));
    }
    Ok(())
}

/// Length cap plus a `local@domain.tld` shape.
fn validate_email(email: &str) -> Result<(), DomainError> {
    if email.chars().count() > EMAIL_MAX_LEN {
        return Err(DomainError::InvalidInput(format!(
            "email must be at most {} characters",
            EMAIL_MAX_LEN
        )));
    }
    match email.split_once('@') {
        Some((local, domain))
            if !local.is_empty() && domain.contains('.') && !domain.contains('@') =>
        {
            Ok(())
        }
        _ => Err(DomainError::InvalidInput(format!(
            "'{}' is not a valid email address",
            email
        ))),
    }
}
