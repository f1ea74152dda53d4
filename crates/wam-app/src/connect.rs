//! Connect overlay state
//!
//! The overlay simulates waiting for a pairing code: it starts in
//! [`PairingStatus::Loading`] and flips to [`PairingStatus::Ready`] once a
//! fixed timer fires. Confirmation never depends on readiness.

/// Availability of the (simulated) pairing code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PairingStatus {
    #[default]
    Loading,
    Ready,
}

/// Linking steps shown next to the pairing code
pub const LINK_INSTRUCTIONS: [&str; 4] = [
    "Open WhatsApp on your phone",
    "Tap Menu or Settings and select Linked Devices",
    "Tap on Link a device",
    "Point your phone to this screen to capture the code",
];

#[derive(Debug, Clone, Default)]
pub struct ConnectOverlayState {
    status: PairingStatus,
    timer_armed: bool,
}

impl ConnectOverlayState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> PairingStatus {
        self.status
    }

    pub fn is_ready(&self) -> bool {
        self.status == PairingStatus::Ready
    }

    /// Arm the pairing timer.
    ///
    /// Returns `true` only on the first call; later calls (re-shows,
    /// re-renders) must not start another timer.
    pub fn arm_timer(&mut self) -> bool {
        if self.timer_armed {
            return false;
        }
        self.timer_armed = true;
        true
    }

    /// Transition `Loading -> Ready`.
    ///
    /// Returns `true` if the transition happened.
    pub fn mark_ready(&mut self) -> bool {
        if self.status == PairingStatus::Ready {
            return false;
        }
        self.status = PairingStatus::Ready;
        true
    }
}
