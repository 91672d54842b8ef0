//! Things the UI addresses by identifier.

/// A record with a stable identifier and a human-facing name.
///
/// The identifier is what selection, detail and comparison hold on to; it
/// stays valid while filters hide and show the record.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    /// Name shown in headings and column headers.
    fn display_name(&self) -> &str;
}
