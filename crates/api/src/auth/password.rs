use crate::error::AppError;

pub struct PasswordService;

impl PasswordService {
    pub fn hash(password: &str) -> Result<String, AppError> {
        bcrypt::hash(password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))
    }

    pub fn verify(password: &str, hash: &str) -> Result<bool, AppError> {
        bcrypt::verify(password, hash)
            .map_err(|e| AppError::Internal(format!("password verification failed: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify() {
        let hash = PasswordService::hash("hunter2").unwrap();
        assert!(PasswordService::verify("hunter2", &hash).unwrap());
        assert!(!PasswordService::verify("hunter3", &hash).unwrap());
    }
}
