use itertools::Itertools;
use thiserror::Error;

const PRODUCT_PAGE_BASE: &str = "https://www.redbull.com/images/products";

/// Output file name and product page slug for every known edition.
const RED_BULL_EDITIONS: [(&str, &str); 12] = [
    ("redbull-original.webp", "red-bull-original"),
    ("redbull-sugarfree.webp", "red-bull-sugarfree"),
    ("redbull-zero.webp", "red-bull-zero"),
    ("redbull-red-edition.webp", "red-bull-red-edition"),
    ("redbull-blue-edition.webp", "red-bull-blue-edition"),
    ("redbull-yellow-edition.webp", "red-bull-yellow-edition"),
    ("redbull-green-edition.webp", "red-bull-green-edition"),
    ("redbull-purple-edition.webp", "red-bull-purple-edition"),
    ("redbull-peach-edition.webp", "red-bull-peach-edition"),
    ("redbull-summer-edition.webp", "red-bull-summer-edition"),
    ("redbull-winter-edition.webp", "red-bull-winter-edition"),
    ("redbull-amber-edition.webp", "red-bull-amber-edition"),
];

#[derive(Debug, PartialEq, Error)]
pub enum CatalogError {
    #[error("duplicate file name in catalog: {0}")]
    DuplicateFileName(String),
    #[error("invalid file name in catalog: {0:?}")]
    InvalidFileName(String),
}

/// A product variant and where its image comes from.
#[derive(Debug, Clone, PartialEq)]
pub struct Flavor {
    pub file_name: String,
    pub product_page: String,
    /// Resolves straight to image bytes. `None` means manual download only.
    pub direct_url: Option<String>,
}

impl Flavor {
    pub fn new(file_name: &str, product_page: &str, direct_url: Option<&str>) -> Self {
        Self {
            file_name: file_name.to_string(),
            product_page: product_page.to_string(),
            direct_url: direct_url
                .filter(|url| !url.trim().is_empty())
                .map(str::to_string),
        }
    }

    /// The direct URL, with blank strings treated as not configured.
    pub fn download_url(&self) -> Option<&str> {
        self.direct_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

/// Ordered flavor table with unique, plain file names.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    flavors: Vec<Flavor>,
}

impl Catalog {
    pub fn new(flavors: Vec<Flavor>) -> Result<Self, CatalogError> {
        if let Some(invalid) = flavors.iter().find(|f| !is_plain_file_name(&f.file_name)) {
            return Err(CatalogError::InvalidFileName(invalid.file_name.clone()));
        }

        if let Some(duplicate) = flavors.iter().map(|f| f.file_name.as_str()).duplicates().next() {
            return Err(CatalogError::DuplicateFileName(duplicate.to_string()));
        }

        Ok(Self { flavors })
    }

    /// The compiled-in Red Bull table. No direct URLs are known yet, so every
    /// entry has to be fetched by hand until someone fills them in.
    pub fn red_bull() -> Result<Self, CatalogError> {
        let flavors = RED_BULL_EDITIONS
            .iter()
            .map(|(file_name, slug)| {
                let page = format!("{}/{}", PRODUCT_PAGE_BASE, slug);
                Flavor::new(file_name, &page, None)
            })
            .collect();

        Self::new(flavors)
    }

    pub fn flavors(&self) -> &[Flavor] {
        &self.flavors
    }

    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.flavors.iter().map(|f| f.file_name.as_str())
    }

    pub fn has_direct_urls(&self) -> bool {
        self.flavors.iter().any(|f| f.download_url().is_some())
    }

    pub fn len(&self) -> usize {
        self.flavors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flavors.is_empty()
    }
}

fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
}
