use crate::data::Item;

/// User interactions coming from the items screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemsViewEvent {
    RefreshItems,
    ItemClicked(Item),
    GenerateRandomText,
}
