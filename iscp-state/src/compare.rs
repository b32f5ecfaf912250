//! Change detection helpers shared by the update handlers

/// Overwrite `slot` with `value` and report whether the stored value differed.
///
/// The write happens unconditionally so the stored value is always the most
/// recent one received.
pub fn update_field<T: PartialEq>(slot: &mut T, value: T) -> bool {
    let changed = *slot != value;
    *slot = value;
    changed
}

/// Null-safe equality: equal iff both absent, or both present and equal
pub fn optional_eq<T: PartialEq>(a: Option<&T>, b: Option<&T>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// [`update_field`] for optional slots, using [`optional_eq`]
pub fn update_optional<T: PartialEq>(slot: &mut Option<T>, value: Option<T>) -> bool {
    let changed = !optional_eq(slot.as_ref(), value.as_ref());
    *slot = value;
    changed
}

/// Case-insensitive comparison used for list titles and service names
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.to_uppercase() == b.to_uppercase()
}
