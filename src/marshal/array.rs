//! Owned typed arrays and their boundary-transferable forms.

use std::collections::TryReserveError;
use std::ffi::c_void;
use std::fmt;

use bytemuck::Pod;

/// 2D vector element, `[x, y]`.
pub type Vec2 = [f32; 2];
/// 3D vector element, `[x, y, z]`.
pub type Vec3 = [f32; 3];
/// 4D vector element, `[x, y, z, w]`.
pub type Vec4 = [f32; 4];

/// Owned array of 32-bit signed integers.
pub type IntArray = TypedArray<i32>;
/// Owned array of 32-bit floats.
pub type FloatArray = TypedArray<f32>;
/// Owned array of 2D vectors.
pub type Vec2Array = TypedArray<Vec2>;
/// Owned array of 3D vectors.
pub type Vec3Array = TypedArray<Vec3>;
/// Owned array of 4D vectors.
pub type Vec4Array = TypedArray<Vec4>;

/// Deallocation entry point exposed by the side that allocated a foreign
/// buffer. `is_array` distinguishes array from single-object allocations.
pub type ReleaseFn = unsafe extern "C" fn(ptr: *mut c_void, is_array: bool);

/// Pointer+length pair as it crosses the boundary.
///
/// Carries no ownership by itself: it is either a borrowing view of a
/// [`TypedArray`] (outgoing) or an opaque handle wrapped in a
/// [`ForeignBuffer`] (incoming). Empty arrays are a null pointer with
/// length 0.
#[repr(C)]
pub struct RawArray<T> {
    pub ptr: *mut T,
    pub len: u32,
}

impl<T> RawArray<T> {
    /// Null pointer, zero length.
    pub const fn empty() -> Self {
        Self {
            ptr: std::ptr::null_mut(),
            len: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ptr.is_null() || self.len == 0
    }
}

impl<T> Clone for RawArray<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RawArray<T> {}

impl<T> fmt::Debug for RawArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawArray")
            .field("ptr", &self.ptr)
            .field("len", &self.len)
            .finish()
    }
}

/// Host-owned typed array: the local ownership variant.
///
/// The element count always equals the backing sequence's length by
/// construction. Elements are `Pod` so the backing memory has the exact
/// fixed-size layout the boundary contract requires.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedArray<T: Pod> {
    data: Vec<T>,
}

impl<T: Pod> TypedArray<T> {
    /// Wrap an existing owned sequence. No copy.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Copying construction with fallible allocation. Allocation failure is
    /// the one recoverable error in this layer; it surfaces to the caller
    /// instead of aborting.
    pub fn try_from_slice(slice: &[T]) -> Result<Self, TryReserveError> {
        let mut data = Vec::new();
        data.try_reserve_exact(slice.len())?;
        data.extend_from_slice(slice);
        Ok(Self { data })
    }

    pub fn len(&self) -> u32 {
        self.data.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Borrowing view for outgoing transfer.
    ///
    /// The view is valid only while this array is alive and unmodified;
    /// the receiving side must treat it as read-only.
    pub fn as_raw(&self) -> RawArray<T> {
        if self.data.is_empty() {
            RawArray::empty()
        } else {
            RawArray {
                ptr: self.data.as_ptr() as *mut T,
                len: self.data.len() as u32,
            }
        }
    }

    /// Materialize a local copy from boundary memory.
    ///
    /// # Safety
    ///
    /// `raw.ptr` must refer to at least `raw.len` contiguous, initialized
    /// elements of `T`'s layout, or be null with `raw.len == 0`. Violating
    /// this is undefined behavior at the boundary, not a recoverable
    /// error; the burden of correctness is on whichever side produced the
    /// pointer.
    pub unsafe fn from_raw_copy(raw: RawArray<T>) -> Self {
        if raw.is_empty() {
            return Self { data: Vec::new() };
        }
        let slice = std::slice::from_raw_parts(raw.ptr as *const T, raw.len as usize);
        Self {
            data: slice.to_vec(),
        }
    }
}

/// Owning handle over a buffer allocated on the far side of the boundary.
///
/// Move-only: releasing exactly once per foreign allocation is enforced by
/// the type rather than by caller discipline. [`release`](Self::release)
/// hands the memory back explicitly; dropping the handle does the same.
/// There is no way to read the buffer after release because release
/// consumes the handle.
pub struct ForeignBuffer<T: Pod> {
    raw: RawArray<T>,
    release: ReleaseFn,
}

impl<T: Pod> ForeignBuffer<T> {
    /// Take ownership of a boundary allocation.
    ///
    /// # Safety
    ///
    /// `raw` must be a live allocation made by the side that exposes
    /// `release`, holding `raw.len` initialized elements of `T`, and no
    /// other owner may exist for it. `release` must accept `raw.ptr` with
    /// `is_array == true`.
    pub unsafe fn from_raw(raw: RawArray<T>, release: ReleaseFn) -> Self {
        Self { raw, release }
    }

    pub fn len(&self) -> u32 {
        self.raw.len
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Materialize the contents as a host-owned array.
    pub fn to_local(&self) -> TypedArray<T> {
        // Validity is guaranteed by the from_raw contract until release,
        // and release consumes self.
        unsafe { TypedArray::from_raw_copy(self.raw) }
    }

    /// Hand the buffer back to its allocator.
    pub fn release(self) {
        drop(self);
    }
}

impl<T: Pod> Drop for ForeignBuffer<T> {
    fn drop(&mut self) {
        if !self.raw.ptr.is_null() {
            unsafe { (self.release)(self.raw.ptr.cast(), true) }
        }
    }
}

impl<T: Pod> fmt::Debug for ForeignBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForeignBuffer")
            .field("raw", &self.raw)
            .finish()
    }
}
