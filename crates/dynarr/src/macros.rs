//! Declaration macro.

/// Build a [`DynArray`](crate::DynArray) from a list of values.
///
/// Values are appended one at a time, so capacity follows the normal
/// doubling schedule from one slot.
///
/// ```
/// use dynarr::dyn_array;
///
/// let empty: dynarr::DynArray<i32> = dyn_array![];
/// assert_eq!(empty.capacity(), 1);
///
/// let a = dyn_array![1, 2, 3];
/// assert_eq!(a.as_slice(), &[1, 2, 3]);
/// assert_eq!(a.capacity(), 4);
/// ```
#[macro_export]
macro_rules! dyn_array {
    () => {
        $crate::DynArray::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut array = $crate::DynArray::new();
        $(array.push($value);)+
        array
    }};
}

#[cfg(test)]
mod tests {
    use crate::DynArray;

    #[test]
    fn empty_macro_matches_new() {
        let a: DynArray<u8> = dyn_array![];
        assert_eq!((a.len(), a.capacity()), (0, 1));
    }

    #[test]
    fn trailing_comma_accepted() {
        let a = dyn_array!["a", "b",];
        assert_eq!(a.len(), 2);
    }
}
