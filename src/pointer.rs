/// Pointer device access used by the nudge debouncer.
///
/// The host toolkit reports a warp back to the same position as pointer
/// motion, which re-enters the overlay redraw path without the caller
/// repainting explicitly.
pub trait PointerHost: Send + Sync {
    /// Current pointer position in screen coordinates, if the device is
    /// reachable.
    fn cursor_position(&self) -> Option<(i32, i32)>;

    /// Move the pointer to `pos`.
    fn warp_cursor(&self, pos: (i32, i32));
}

/// Pointer host backed by the native cursor APIs. On platforms without a
/// backing implementation it reports no position and warps go nowhere, so
/// nudges are skipped harmlessly.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemPointer;

impl PointerHost for SystemPointer {
    fn cursor_position(&self) -> Option<(i32, i32)> {
        #[cfg(target_os = "windows")]
        {
            use windows::Win32::Foundation::POINT;
            use windows::Win32::UI::WindowsAndMessaging::GetCursorPos;
            let mut pt = POINT::default();
            if unsafe { GetCursorPos(&mut pt).is_ok() } {
                Some((pt.x, pt.y))
            } else {
                None
            }
        }

        #[cfg(not(target_os = "windows"))]
        {
            None
        }
    }

    fn warp_cursor(&self, pos: (i32, i32)) {
        #[cfg(target_os = "windows")]
        {
            use windows::Win32::UI::WindowsAndMessaging::SetCursorPos;
            unsafe {
                let _ = SetCursorPos(pos.0, pos.1);
            }
        }

        #[cfg(not(target_os = "windows"))]
        {
            let _ = pos;
        }
    }
}
