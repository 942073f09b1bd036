use jsonwebtoken::{DecodingKey, EncodingKey, Header, TokenData, Validation};
use serde::{Deserialize, Serialize};

/// Identity carried by a bearer token: the user id in `sub` plus the email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserClaims {
    pub sub: String,
    pub email: String,
    pub exp: i64,
}

pub fn generate_token<K: AsRef<[u8]>>(
    claims: UserClaims,
    key: K,
) -> jsonwebtoken::errors::Result<String> {
    let header = Header::default();
    let key = EncodingKey::from_secret(key.as_ref());

    let token = jsonwebtoken::encode(&header, &claims, &key)?;
    Ok(token)
}

pub fn process_token<K: AsRef<[u8]>>(
    token: &str,
    key: K,
) -> jsonwebtoken::errors::Result<TokenData<UserClaims>> {
    let validation = Validation::default();
    let key = DecodingKey::from_secret(key.as_ref());

    let claims = jsonwebtoken::decode::<UserClaims>(token, &key, &validation)?;
    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims() -> UserClaims {
        UserClaims {
            sub: uuid::Uuid::new_v4().to_string(),
            email: String::from("student@example.com"),
            exp: (chrono::Utc::now() + chrono::Duration::days(1)).timestamp(),
        }
    }

    #[test]
    fn token_round_trip() {
        let claims = claims();
        let token = generate_token(claims.clone(), "test-secret").unwrap();

        let decoded = process_token(&token, "test-secret").unwrap();
        assert_eq!(decoded.claims.sub, claims.sub);
        assert_eq!(decoded.claims.email, claims.email);
    }

    #[test]
    fn token_wrong_key_rejected() {
        let token = generate_token(claims(), "test-secret").unwrap();
        assert!(process_token(&token, "another-secret").is_err());
    }

    #[test]
    fn expired_token_rejected() {
        let mut claims = claims();
        claims.exp = (chrono::Utc::now() - chrono::Duration::hours(1)).timestamp();

        let token = generate_token(claims, "test-secret").unwrap();
        assert!(process_token(&token, "test-secret").is_err());
    }
}
