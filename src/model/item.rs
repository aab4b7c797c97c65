//! Catalog items shown in the carousel and the searchable list

/// Glyph used in place of the photo placeholder image
pub const PHOTO_GLYPH: &str = "▣";

/// A card in the carousel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselItem {
    pub image_name: String,
}

/// A row in the searchable list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub image_name: String,
    pub title: String,
}

impl ListItem {
    pub fn new(image_name: &str, title: impl Into<String>) -> Self {
        Self {
            image_name: image_name.to_string(),
            title: title.into(),
        }
    }
}

/// Static catalog backing the list
pub fn populate() -> Vec<ListItem> {
    (1..=15)
        .map(|n| ListItem::new("photo.fill", format!("Item {}", n)))
        .collect()
}

/// Carousel cards; every card shows the same placeholder photo
pub fn carousel_items(count: usize) -> Vec<CarouselItem> {
    (0..count)
        .map(|_| CarouselItem {
            image_name: "photo.fill".to_string(),
        })
        .collect()
}

/// Items whose title contains `query` (case-sensitive). An empty query
/// matches everything.
pub fn filter_items<'a>(items: &'a [ListItem], query: &str) -> Vec<&'a ListItem> {
    if query.is_empty() {
        return items.iter().collect();
    }
    items.iter().filter(|item| item.title.contains(query)).collect()
}
