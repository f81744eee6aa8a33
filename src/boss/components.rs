//! Boss domain: components for the boss, its hit flash and aerial strikes.

use bevy::color::Mix;
use bevy::prelude::*;

use crate::core::Cooldown;

#[derive(Component, Debug)]
pub struct Boss;

/// Result of one hit on a [`BossHealth`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BossHit {
    /// Already defeated.
    Ignored,
    Wounded {
        remaining: f32,
    },
    /// This hit brought health to zero.
    Defeated,
}

#[derive(Component, Debug, Clone)]
pub struct BossHealth {
    pub current: f32,
    pub max: f32,
    defeated: bool,
}

impl BossHealth {
    pub fn new(max: f32) -> Self {
        Self {
            current: max,
            max,
            defeated: false,
        }
    }

    pub fn is_defeated(&self) -> bool {
        self.defeated
    }

    pub fn fraction(&self) -> f32 {
        if self.max > 0.0 {
            (self.current / self.max).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    pub fn take_damage(&mut self, amount: f32) -> BossHit {
        if self.defeated {
            return BossHit::Ignored;
        }

        self.current = (self.current - amount).max(0.0);
        if self.current <= 0.0 {
            self.defeated = true;
            return BossHit::Defeated;
        }

        BossHit::Wounded {
            remaining: self.current,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FlashPhase {
    #[default]
    Idle,
    Hold {
        remaining: f32,
    },
    Fade {
        elapsed: f32,
    },
}

/// Solid hit color for `hold` seconds, then a blend back to the base color
/// over `fade` seconds.
#[derive(Component, Debug, Clone)]
pub struct DamageFlash {
    pub base_color: Color,
    pub hit_color: Color,
    pub hold: f32,
    pub fade: f32,
    phase: FlashPhase,
}

impl DamageFlash {
    pub fn new(base_color: Color, hit_color: Color, hold: f32, fade: f32) -> Self {
        Self {
            base_color,
            hit_color,
            hold,
            fade,
            phase: FlashPhase::Idle,
        }
    }

    pub fn phase(&self) -> FlashPhase {
        self.phase
    }

    /// Restart from the hold, dropping any flash in progress.
    pub fn trigger(&mut self) {
        self.phase = FlashPhase::Hold {
            remaining: self.hold,
        };
    }

    pub fn tick(&mut self, dt: f32) {
        self.phase = match self.phase {
            FlashPhase::Idle => FlashPhase::Idle,
            FlashPhase::Hold { remaining } if remaining - dt > 0.0 => FlashPhase::Hold {
                remaining: remaining - dt,
            },
            FlashPhase::Hold { .. } => FlashPhase::Fade { elapsed: 0.0 },
            FlashPhase::Fade { elapsed } if elapsed + dt < self.fade => FlashPhase::Fade {
                elapsed: elapsed + dt,
            },
            FlashPhase::Fade { .. } => FlashPhase::Idle,
        };
    }

    pub fn color(&self) -> Color {
        match self.phase {
            FlashPhase::Idle => self.base_color,
            FlashPhase::Hold { .. } => self.hit_color,
            FlashPhase::Fade { elapsed } => {
                let t = if self.fade > 0.0 {
                    (elapsed / self.fade).clamp(0.0, 1.0)
                } else {
                    1.0
                };
                LinearRgba::from(self.hit_color)
                    .mix(&LinearRgba::from(self.base_color), t)
                    .into()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StrikePhase {
    #[default]
    Ready,
    /// Projectile hovers above the player.
    Charging {
        remaining: f32,
        projectile: Entity,
    },
    Recovering {
        remaining: f32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrikeAction {
    None,
    /// Charge finished: launch this projectile if it still exists.
    Fire(Entity),
    /// Cooldown finished; the next strike may begin.
    Rearmed,
}

/// Periodic attack that drops a projectile onto the player's position.
#[derive(Component, Debug, Clone)]
pub struct AerialStrike {
    pub spawn_height: f32,
    pub charge_time: f32,
    pub cooldown: f32,
    pub fall_speed: f32,
    pub projectile_lifetime: f32,
    phase: StrikePhase,
}

impl AerialStrike {
    pub fn new(
        spawn_height: f32,
        charge_time: f32,
        cooldown: f32,
        fall_speed: f32,
        projectile_lifetime: f32,
    ) -> Self {
        Self {
            spawn_height,
            charge_time,
            cooldown,
            fall_speed,
            projectile_lifetime,
            phase: StrikePhase::Ready,
        }
    }

    pub fn phase(&self) -> StrikePhase {
        self.phase
    }

    pub fn begin_charge(&mut self, projectile: Entity) {
        self.phase = StrikePhase::Charging {
            remaining: self.charge_time,
            projectile,
        };
    }

    pub fn advance(&mut self, dt: f32) -> StrikeAction {
        match self.phase {
            StrikePhase::Ready => StrikeAction::None,
            StrikePhase::Charging {
                remaining,
                projectile,
            } => {
                if remaining - dt > 0.0 {
                    self.phase = StrikePhase::Charging {
                        remaining: remaining - dt,
                        projectile,
                    };
                    return StrikeAction::None;
                }
                self.phase = StrikePhase::Recovering {
                    remaining: self.cooldown,
                };
                StrikeAction::Fire(projectile)
            }
            StrikePhase::Recovering { remaining } => {
                if remaining - dt > 0.0 {
                    self.phase = StrikePhase::Recovering {
                        remaining: remaining - dt,
                    };
                    return StrikeAction::None;
                }
                self.phase = StrikePhase::Ready;
                StrikeAction::Rearmed
            }
        }
    }
}

/// Falling hazard spawned by [`AerialStrike`].
#[derive(Component, Debug)]
pub struct StrikeProjectile {
    pub boss: Entity,
    pub radius: f32,
}

/// Despawns the entity when the countdown reaches zero.
#[derive(Component, Debug)]
pub struct Lifetime {
    timer: Cooldown,
}

impl Lifetime {
    pub fn new(seconds: f32) -> Self {
        Self {
            timer: Cooldown::running(seconds),
        }
    }

    /// True once expired.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.timer.tick(dt) || self.timer.is_ready()
    }
}
