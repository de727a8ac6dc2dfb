use serde::Serialize;

/// A list entry shown on the items screen.
///
/// The set of variants is closed: every item is either text-only or carries
/// an image reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Item {
    Text(TextItem),
    Image(ImageItem),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextItem {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
}

impl Item {
    pub fn id(&self) -> &str {
        match self {
            Item::Text(item) => &item.id,
            Item::Image(item) => &item.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Item::Text(item) => &item.name,
            Item::Image(item) => &item.name,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Item::Text(item) => &item.description,
            Item::Image(item) => &item.description,
        }
    }

    /// Image location, present only for image items.
    pub fn image_url(&self) -> Option<&str> {
        match self {
            Item::Text(_) => None,
            Item::Image(item) => Some(&item.image_url),
        }
    }
}

impl From<TextItem> for Item {
    fn from(item: TextItem) -> Self {
        Item::Text(item)
    }
}

impl From<ImageItem> for Item {
    fn from(item: ImageItem) -> Self {
        Item::Image(item)
    }
}
