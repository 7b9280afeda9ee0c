//! View-selector relabeling.

use relabeler_hooks::ViewDescriptor;

/// Replace each entry's `anchor` with `lookup(anchor)` when it yields a value.
///
/// This is a value substitution only: the sequence keeps its length and order.
pub fn relabel_views<F>(views: Vec<ViewDescriptor>, mut lookup: F) -> Vec<ViewDescriptor>
where
    F: FnMut(&str) -> Option<String>,
{
    views
        .into_iter()
        .map(|mut view| {
            if let Some(label) = lookup(&view.anchor) {
                view.anchor = label;
            }
            view
        })
        .collect()
}
