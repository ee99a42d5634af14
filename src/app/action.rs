/// A user-level player operation.
///
/// Key bindings and mouse hits both translate into an `Action`, which
/// `App::apply` executes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    PlayPause,
    Previous,
    Next,
    /// Jump to a percentage of the current track.
    ScrubTo(u8),
    /// Move the scrubber by a signed number of percentage points.
    ScrubBy(i16),
    SetVolume(u8),
    /// Move the volume by a signed number of points.
    VolumeBy(i16),
    ToggleMute,
    ToggleLike,
    ToggleShuffle,
    CycleRepeat,
    /// Jump straight to a catalog index.
    Select(usize),
    ToggleHelp,
}
