//! Social share link composition
//!
//! Pure client-side URL building: the canonical per-article page URL plus
//! prefilled share links for the usual networks. Nothing here talks to the
//! network - in a terminal the composed URL is copied to the clipboard.

use crate::api::types::Article;

/// Canonical public URL for one article: `<site>/blog/<id>`
pub fn article_url(site_base: &str, article_id: i64) -> String {
    format!("{}/blog/{}", site_base.trim_end_matches('/'), article_id)
}

/// Networks a share link can be composed for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTarget {
    Twitter,
    Facebook,
    LinkedIn,
}

impl ShareTarget {
    pub const ALL: [ShareTarget; 3] = [
        ShareTarget::Twitter,
        ShareTarget::Facebook,
        ShareTarget::LinkedIn,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ShareTarget::Twitter => "X / Twitter",
            ShareTarget::Facebook => "Facebook",
            ShareTarget::LinkedIn => "LinkedIn",
        }
    }

    /// Build the prefilled share URL for this network
    pub fn share_url(&self, article_url: &str, title: &str) -> String {
        let url = urlencoding::encode(article_url);
        match self {
            ShareTarget::Twitter => {
                let text = urlencoding::encode(title);
                format!("https://twitter.com/intent/tweet?url={url}&text={text}")
            }
            ShareTarget::Facebook => {
                format!("https://www.facebook.com/sharer/sharer.php?u={url}")
            }
            ShareTarget::LinkedIn => {
                format!("https://www.linkedin.com/sharing/share-offsite/?url={url}")
            }
        }
    }
}

/// All share links for one article, in display order
pub fn share_links(site_base: &str, article: &Article) -> Vec<(ShareTarget, String)> {
    let url = article_url(site_base, article.id);
    ShareTarget::ALL
        .iter()
        .map(|target| (*target, target.share_url(&url, &article.title)))
        .collect()
}
