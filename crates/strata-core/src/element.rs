//! Byte codec for plain numeric element types.
//!
//! Containers store opaque fixed-width byte payloads and keep no type
//! tag. [`Element`] is the typed convenience layer: it converts a value
//! to and from its native-endian bytes so callers do not hand-roll the
//! conversion at every call site. Interpreting a container with a type
//! whose width differs from its element size is rejected by the
//! container, not by this trait.

/// A fixed-width value that can be stored in a type-erased container.
pub trait Element: Copy {
    /// Width of the encoded value in bytes.
    const SIZE: usize;

    /// Write the native-endian bytes of `self` into `out`.
    ///
    /// # Panics
    ///
    /// Panics if `out.len() != Self::SIZE`.
    fn write_bytes(&self, out: &mut [u8]);

    /// Decode a value from exactly `Self::SIZE` native-endian bytes.
    ///
    /// Returns `None` if `bytes.len() != Self::SIZE`.
    fn read_bytes(bytes: &[u8]) -> Option<Self>;
}

macro_rules! impl_element {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Element for $ty {
                const SIZE: usize = std::mem::size_of::<$ty>();

                fn write_bytes(&self, out: &mut [u8]) {
                    out.copy_from_slice(&self.to_ne_bytes());
                }

                fn read_bytes(bytes: &[u8]) -> Option<Self> {
                    let array = <[u8; std::mem::size_of::<$ty>()]>::try_from(bytes).ok()?;
                    Some(<$ty>::from_ne_bytes(array))
                }
            }
        )*
    };
}

impl_element!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
