use crate::domain::errors::DomainError;

const CNT_ARTICLE_CATEGORY: &str = "articles_category_id_fkey";
const CNT_ARTICLE_PRICE_CHECK: &str = "articles_price_check";
const CNT_CATEGORY_NAME: &str = "categories_name_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_CATEGORY => DomainError::NotFound("category not found".into()),
                    CNT_ARTICLE_PRICE_CHECK => {
                        DomainError::Validation("price cannot be negative".into())
                    }
                    CNT_CATEGORY_NAME => DomainError::Conflict("category already exists".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
