use crate::types::Rgb;

/// Brief highlight on the instruction text after each launch.
///
/// `amount` is the blend toward the flash colour; it jumps up on
/// [`Glow::flash`] and eases back to zero every frame.
#[derive(Clone, Copy, Debug)]
pub struct Glow {
    pub amount: f32,
}

impl Glow {
    pub const BASE: Rgb = Rgb::grey(100);
    pub const FLASH: Rgb = Rgb::new(255, 245, 180);
    const FLASH_AMOUNT: f32 = 0.8;
    const FADE_RATE: f32 = 0.1;

    pub fn new() -> Self {
        Self { amount: 0.0 }
    }

    pub fn flash(&mut self) {
        self.amount = Self::FLASH_AMOUNT;
    }

    /// Eases `amount` one frame toward zero.
    pub fn fade(&mut self) {
        self.amount += (0.0 - self.amount) * Self::FADE_RATE;
    }

    pub fn color(&self) -> Rgb {
        Self::BASE.lerp(Self::FLASH, self.amount)
    }
}

impl Default for Glow {
    fn default() -> Self {
        Self::new()
    }
}
