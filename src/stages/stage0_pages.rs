use tracing::{debug, warn};

/// Configuration for transcript page selection
#[derive(Debug, Clone)]
pub struct PageFilterConfig {
    /// Minimum whitespace-delimited words for a page to count as transcript body
    pub min_words: usize,
    /// Keep the final page regardless of length (closing remarks are often short)
    pub always_keep_last: bool,
}

impl Default for PageFilterConfig {
    fn default() -> Self {
        Self {
            min_words: 150,
            always_keep_last: true,
        }
    }
}

/// Result of page selection
#[derive(Debug, Clone)]
pub struct PageSelection {
    /// Kept pages, each preceded by a newline, in original order
    pub text: String,
    /// Zero-based indices of kept pages
    pub kept_pages: Vec<usize>,
    /// Number of pages examined
    pub total_pages: usize,
}

/// Perform Stage 0: drop cover, agenda and disclaimer pages
///
/// Body pages are dense running text; boilerplate pages are short.
pub fn select_pages<S: AsRef<str>>(pages: &[S], config: &PageFilterConfig) -> PageSelection {
    let mut text = String::new();
    let mut kept_pages = Vec::new();

    for (i, page) in pages.iter().enumerate() {
        let page = page.as_ref();
        let word_count = page.split_whitespace().count();
        let is_last = i + 1 == pages.len();

        if word_count < config.min_words && !(is_last && config.always_keep_last) {
            debug!("Skipping page {} ({} words)", i + 1, word_count);
            continue;
        }

        text.push('\n');
        text.push_str(page);
        kept_pages.push(i);
    }

    if kept_pages.is_empty() && !pages.is_empty() {
        warn!("No transcript pages kept out of {}", pages.len());
    }

    PageSelection {
        text,
        kept_pages,
        total_pages: pages.len(),
    }
}

/// Concatenate the transcript body pages into one document string
pub fn filter_pages<S: AsRef<str>>(pages: &[S], config: &PageFilterConfig) -> String {
    select_pages(pages, config).text
}
