use crate::config::{ANIMATION_FRAMES, ANIMATION_FRAME_TIME};

/// A flip-book frame counter driven by a running clock.
///
/// Feed it the total elapsed time each frame. Whenever the clock has moved
/// more than one frame duration past the last step, it advances one frame,
/// wrapping back to frame 0 after the last one. At most one frame is stepped
/// per call, so a stalled caller slows the animation down instead of skipping
/// frames.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameAnimation {
    frame_count: u32,
    frame_duration: f32,
    anchor: f32,
    current: u32,
}

impl Default for FrameAnimation {
    /// 120 frames at 30 frames per second.
    fn default() -> Self {
        Self::new(ANIMATION_FRAMES, ANIMATION_FRAME_TIME)
    }
}

impl FrameAnimation {
    /// `frame_count` is clamped to at least one frame.
    pub fn new(frame_count: u32, frame_duration: f32) -> Self {
        Self {
            frame_count: frame_count.max(1),
            frame_duration,
            anchor: 0.0,
            current: 0,
        }
    }

    /// Step the animation to `total_time` seconds, returning the current frame.
    pub fn advance(&mut self, total_time: f32) -> u32 {
        if total_time - self.anchor > self.frame_duration {
            self.anchor += self.frame_duration;
            self.current += 1;
            if self.current == self.frame_count {
                self.current = 0;
            }
        }
        self.current
    }

    #[inline]
    pub fn frame(&self) -> u32 {
        self.current
    }

    #[inline]
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }
}
