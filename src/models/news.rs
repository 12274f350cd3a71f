use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

/// A row in the `news` table. Immutable once inserted.
#[derive(FromRow, Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub image: String,
    pub date_posted: String,
}

/// The JSON shape handed to clients: `image` holds a fully-qualified
/// URL instead of the stored filename.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PublicNewsItem {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub image: String,
    pub date_posted: String,
}

impl NewsItem {
    pub fn to_public_view(&self, base_url: &str) -> PublicNewsItem {
        PublicNewsItem {
            id: self.id,
            title: self.title.clone(),
            content: self.content.clone(),
            image: format!("{}/images/{}", base_url, self.image),
            date_posted: self.date_posted.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> NewsItem {
        NewsItem {
            id: 1,
            title: "Launch".to_string(),
            content: "We launched.".to_string(),
            image: "1700000000000-valid.jpg".to_string(),
            date_posted: "2024-01-01T10:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn public_view_rewrites_image_to_url() {
        let view = item().to_public_view("http://localhost:3000");
        assert_eq!(
            view.image,
            "http://localhost:3000/images/1700000000000-valid.jpg"
        );
    }

    #[test]
    fn public_view_keeps_remaining_fields() {
        let news = item();
        let view = news.to_public_view("http://localhost:3000");
        assert_eq!(view.id, news.id);
        assert_eq!(view.title, news.title);
        assert_eq!(view.content, news.content);
        assert_eq!(view.date_posted, news.date_posted);
    }
}
