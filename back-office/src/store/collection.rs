//! Whole-record collection edits keyed by id

use shared::models::Entity;

/// Append without any duplicate-id check
#[inline]
pub(crate) fn append<T>(items: &mut Vec<T>, record: T) {
    items.push(record);
}

/// Replace every record whose id matches `record`'s id
///
/// Returns whether anything was replaced.
pub(crate) fn replace_by_id<T: Entity>(items: &mut [T], record: &T) -> bool {
    let mut replaced = false;
    for slot in items.iter_mut().filter(|item| item.id() == record.id()) {
        *slot = record.clone();
        replaced = true;
    }
    replaced
}

/// Drop every record with the given id
///
/// Returns whether anything was removed.
pub(crate) fn remove_by_id<T: Entity>(items: &mut Vec<T>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}

/// Refresh a session pointer when it refers to the edited record
pub(crate) fn refresh_pointer<T: Entity>(pointer: &mut Option<T>, record: &T) {
    if pointer.as_ref().is_some_and(|current| current.id() == record.id()) {
        *pointer = Some(record.clone());
    }
}

/// Clear a session pointer when it refers to the deleted id
pub(crate) fn clear_pointer<T: Entity>(pointer: &mut Option<T>, id: &str) {
    if pointer.as_ref().is_some_and(|current| current.id() == id) {
        *pointer = None;
    }
}
