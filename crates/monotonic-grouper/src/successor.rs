use num::BigInt;

/// A kind with a well-defined "next value".
///
/// The same operation drives both sides of the algorithm: adjacency testing
/// (`b` is adjacent to `a` iff `a.successor() == Some(b)`) and the expansion
/// of a short run back into the explicit element walk. Implementations must
/// keep the two consistent: repeatedly applying `successor` from a run's
/// start must reproduce exactly the values that were scanned into the run.
///
/// Returns `None` at the top of the type's range, where no next value exists.
pub trait Successor: Sized + Clone + PartialEq {
    fn successor(&self) -> Option<Self>;
}

macro_rules! int_successor {
    ($($ty:ty),*) => {
        $(
            impl Successor for $ty {
                #[inline]
                fn successor(&self) -> Option<Self> {
                    self.checked_add(1)
                }
            }
        )*
    };
}

int_successor!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, usize, isize);

impl Successor for BigInt {
    fn successor(&self) -> Option<Self> {
        Some(self + 1u32)
    }
}

impl Successor for char {
    /// The next scalar value, skipping the surrogate gap.
    fn successor(&self) -> Option<Self> {
        match *self {
            '\u{D7FF}' => Some('\u{E000}'),
            char::MAX => None,
            c => char::from_u32(c as u32 + 1),
        }
    }
}

#[cfg(feature = "date")]
impl Successor for chrono::NaiveDate {
    fn successor(&self) -> Option<Self> {
        self.succ_opt()
    }
}
