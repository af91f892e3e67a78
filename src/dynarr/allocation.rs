use std::{alloc::{self, Layout, alloc, realloc}, ptr::NonNull};

use crate::errors::AllocErr;
use super::DynArr;


#[inline]
pub(super) fn infallible<T>(result: Result<T, AllocErr>) -> T {
    match result {
        Ok(x) => x,
        Err(AllocErr::Layout) => panic!("invalid parameters to Layout::from_size_align"),
        Err(AllocErr::Overflow) => panic!("capacity overflow"),
        Err(AllocErr::Alloc { layout }) => alloc::handle_alloc_error(layout),
    }
}

#[inline]
pub(super) unsafe fn deallocate<T>(ptr: NonNull<T>, cap: usize) {
    let layout = Layout::array::<T>(cap).unwrap();
    unsafe { alloc::dealloc(ptr.as_ptr() as *mut u8, layout) };
}

// Caller guarantees `T` is not zero sized and that `new_cap` exceeds the
// current capacity; the live prefix is carried over by `realloc`.
pub(super) fn try_grow<T>(arr: &mut DynArr<T>, new_cap: usize) -> Result<(), AllocErr> {
    debug_assert!(new_cap >= arr.len);
    debug_assert!(new_cap > arr.capacity);

    let layout = Layout::array::<T>(new_cap).map_err(AllocErr::layout)?;
    debug_assert!(layout.size() > 0);

    let ptr = if arr.capacity == 0 {
        NonNull::new(unsafe { alloc(layout) })
            .ok_or(AllocErr::alloc(layout))?
            .cast()
    } else {
        let prev_layout = Layout::array::<T>(arr.capacity).map_err(AllocErr::layout)?;
        let ptr = unsafe { realloc(arr.buf.as_ptr().cast(), prev_layout, layout.size()) };

        NonNull::new(ptr).ok_or(AllocErr::alloc(layout))?.cast()
    };

    arr.buf = ptr;
    arr.capacity = new_cap;
    Ok(())
}
