use crate::BadOptionalAccess;
use core::fmt;
use core::hint;
use core::mem;
use core::option;
use core::ptr;

use Optional::*;

/// Zero or one `T`, stored inline.
///
/// Assigning a new value into a container that already holds one goes
/// through `T`'s own assignment (`*slot = value`, [`Clone::clone_from`]).
/// Only the `emplace` family and [`reset`](Optional::reset) drop the stored
/// value before a new one arrives.
#[derive(Copy, Debug)]
pub enum Optional<T> {
    Present(T),
    Empty,
}

impl<T> Optional<T> {
    pub const fn new(value: T) -> Self {
        Present(value)
    }

    pub const fn empty() -> Self {
        Empty
    }

    /// Moves the value out of `source` without consuming it.
    ///
    /// `source` keeps reporting a value afterwards: what is left behind is
    /// `T::default()`, the moved-from state.
    pub fn from_moved(source: &mut Self) -> Self
    where
        T: Default,
    {
        match source {
            Present(value) => Present(mem::take(value)),
            Empty => Empty,
        }
    }

    #[must_use]
    pub const fn has_value(&self) -> bool {
        matches!(*self, Present(_))
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.has_value()
    }

    /// Stores `value`, moving it over the current one if there is one.
    pub fn assign(&mut self, value: T) -> &mut T {
        if let Present(slot) = self {
            *slot = value;
        } else {
            self.store(value);
        }

        // SAFETY: both branches above leave `self` present.
        unsafe { self.get_unchecked_mut() }
    }

    pub fn assign_cloned(&mut self, value: &T) -> &mut T
    where
        T: Clone,
    {
        if let Present(slot) = self {
            slot.clone_from(value);
        } else {
            self.store(value.clone());
        }

        // SAFETY: both branches above leave `self` present.
        unsafe { self.get_unchecked_mut() }
    }

    /// Move-assigns `source` into `self`.
    ///
    /// | `self`  | `source` | result                         |
    /// |---------|----------|--------------------------------|
    /// | empty   | empty    | empty                          |
    /// | empty   | present  | present, value moved in        |
    /// | present | empty    | reset                          |
    /// | present | present  | value assigned over the old one |
    pub fn assign_from(&mut self, source: Self) {
        match (self, source) {
            (Present(slot), Present(value)) => *slot = value,
            (this, Present(value)) => {
                this.store(value);
            }
            (this, Empty) => this.reset(),
        }
    }

    /// Same as [`assign_from`](Optional::assign_from), but `source` stays with
    /// the caller. A present `source` is left holding `T::default()`.
    pub fn take_from(&mut self, source: &mut Self)
    where
        T: Default,
    {
        match (self, source) {
            (Present(slot), Present(value)) => *slot = mem::take(value),
            (this, Present(value)) => {
                this.store(mem::take(value));
            }
            (this, Empty) => this.reset(),
        }
    }

    pub fn emplace(&mut self, value: T) -> &mut T {
        self.emplace_with(|| value)
    }

    /// Drops the current value, if any, then stores the one built by `make`.
    ///
    /// If `make` panics the container is left empty.
    pub fn emplace_with<F>(&mut self, make: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.reset();
        self.store(make())
    }

    /// Fallible [`emplace_with`](Optional::emplace_with).
    ///
    /// # Errors
    ///
    /// Returns whatever `make` fails with. The previous value has already
    /// been dropped by then, so the container is left empty.
    pub fn try_emplace_with<F, E>(&mut self, make: F) -> Result<&mut T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        self.reset();
        match make() {
            Ok(value) => Ok(self.store(value)),
            Err(e) => {
                trace_event!(T, "constructor failed, optional left empty");
                Err(e)
            }
        }
    }

    pub fn reset(&mut self) {
        if self.has_value() {
            trace_event!(T, "dropping stored value");
            *self = Empty;
        }
    }

    pub const fn take(&mut self) -> Self {
        mem::replace(self, Empty)
    }

    pub const fn replace(&mut self, value: T) -> Self {
        mem::replace(self, Present(value))
    }

    /// # Errors
    ///
    /// [`BadOptionalAccess`] if no value is stored.
    pub fn value(&self) -> Result<&T, BadOptionalAccess> {
        match self {
            Present(value) => Ok(value),
            Empty => Err(empty_access::<T>()),
        }
    }

    /// # Errors
    ///
    /// [`BadOptionalAccess`] if no value is stored.
    pub fn value_mut(&mut self) -> Result<&mut T, BadOptionalAccess> {
        match self {
            Present(value) => Ok(value),
            Empty => Err(empty_access::<T>()),
        }
    }

    /// # Errors
    ///
    /// [`BadOptionalAccess`] if no value is stored.
    pub fn into_value(self) -> Result<T, BadOptionalAccess> {
        match self {
            Present(value) => Ok(value),
            Empty => Err(empty_access::<T>()),
        }
    }

    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Present(value) => value,
            Empty => unwrap_failed(&BadOptionalAccess),
        }
    }

    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Present(value) => value,
            Empty => unwrap_failed(&msg),
        }
    }

    /// # Safety
    ///
    /// `self` must hold a value.
    pub const unsafe fn get_unchecked(&self) -> &T {
        match self {
            Present(value) => value,
            // SAFETY: the safety contract must be upheld by the caller.
            Empty => unsafe { hint::unreachable_unchecked() },
        }
    }

    /// # Safety
    ///
    /// `self` must hold a value.
    pub const unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        match self {
            Present(value) => value,
            // SAFETY: the safety contract must be upheld by the caller.
            Empty => unsafe { hint::unreachable_unchecked() },
        }
    }

    /// # Safety
    ///
    /// `self` must hold a value.
    pub unsafe fn into_value_unchecked(self) -> T {
        match self {
            Present(value) => value,
            // SAFETY: the safety contract must be upheld by the caller.
            Empty => unsafe { hint::unreachable_unchecked() },
        }
    }

    /// Address of the stored value, null when empty.
    pub const fn as_ptr(&self) -> *const T {
        match self {
            Present(value) => ptr::from_ref(value),
            Empty => ptr::null(),
        }
    }

    /// Address of the stored value, null when empty.
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        match self {
            Present(value) => ptr::from_mut(value),
            Empty => ptr::null_mut(),
        }
    }

    pub const fn as_option(&self) -> option::Option<&T> {
        match self {
            Present(value) => option::Option::Some(value),
            Empty => option::Option::None,
        }
    }

    pub const fn as_option_mut(&mut self) -> option::Option<&mut T> {
        match self {
            Present(value) => option::Option::Some(value),
            Empty => option::Option::None,
        }
    }

    pub fn into_option(self) -> option::Option<T> {
        match self {
            Present(value) => option::Option::Some(value),
            Empty => option::Option::None,
        }
    }

    // `self` must be empty; overwriting `Empty` drops nothing.
    fn store(&mut self, value: T) -> &mut T {
        trace_event!(T, "constructing stored value");
        *self = Present(value);

        // SAFETY: just stored.
        unsafe { self.get_unchecked_mut() }
    }
}

#[cold]
fn empty_access<T>() -> BadOptionalAccess {
    debug_event!(T, "checked access on an empty optional");
    BadOptionalAccess
}

#[cold]
#[track_caller]
fn unwrap_failed(msg: &dyn fmt::Display) -> ! {
    panic!("{msg}")
}

impl<T> Clone for Optional<T>
where
    T: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        match self {
            Present(value) => Present(value.clone()),
            Empty => Empty,
        }
    }

    #[inline]
    fn clone_from(&mut self, source: &Self) {
        match (self, source) {
            (Present(to), Present(from)) => to.clone_from(from),
            (to, Present(from)) => {
                to.store(from.clone());
            }
            (to, Empty) => to.reset(),
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Optional<T> {
        Empty
    }
}

impl<T> From<T> for Optional<T> {
    fn from(value: T) -> Optional<T> {
        Present(value)
    }
}

impl<T> From<option::Option<T>> for Optional<T> {
    fn from(value: option::Option<T>) -> Self {
        match value {
            option::Option::Some(value) => Present(value),
            option::Option::None => Empty,
        }
    }
}

impl<T> From<Optional<T>> for option::Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}
