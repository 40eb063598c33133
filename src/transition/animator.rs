use super::{ManagedViews, Role};

/// One opacity leg of a cross-fade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    pub role: Role,
    pub from: f32,
    pub to: f32,
    pub start_ms: u64,
    pub duration_ms: u64,
}

impl Fade {
    pub fn new(role: Role, from: f32, to: f32, start_ms: u64, duration_ms: u64) -> Self {
        Self {
            role,
            from,
            to,
            start_ms,
            duration_ms,
        }
    }

    pub fn end_ms(&self) -> u64 {
        self.start_ms.saturating_add(self.duration_ms)
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms >= self.end_ms()
    }

    pub fn opacity_at(&self, now_ms: u64) -> f32 {
        if self.duration_ms == 0 || now_ms >= self.end_ms() {
            return self.to;
        }
        if now_ms <= self.start_ms {
            return self.from;
        }
        let progress = (now_ms - self.start_ms) as f32 / self.duration_ms as f32;
        self.from + (self.to - self.from) * progress
    }
}

/// A chained cross-fade: the incoming leg starts when the outgoing one ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CrossFade {
    FadingOut { outgoing: Fade, incoming: Role },
    FadingIn { incoming: Fade },
}

impl CrossFade {
    pub fn incoming(&self) -> Role {
        match self {
            CrossFade::FadingOut { incoming, .. } => *incoming,
            CrossFade::FadingIn { incoming } => incoming.role,
        }
    }

    pub fn end_ms(&self) -> u64 {
        match self {
            CrossFade::FadingOut { outgoing, .. } => outgoing.end_ms().saturating_add(outgoing.duration_ms),
            CrossFade::FadingIn { incoming } => incoming.end_ms(),
        }
    }
}

/// Drives at most one cross-fade at a time.
#[derive(Debug)]
pub struct Animator {
    duration_ms: u64,
    running: Option<CrossFade>,
}

impl Animator {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            running: None,
        }
    }

    pub fn running(&self) -> Option<&CrossFade> {
        self.running.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Starts fading `outgoing` out and then `incoming` in.
    ///
    /// `incoming` is shown at opacity 0 and raised immediately. Without an
    /// outgoing partner only the fade-in runs. Any running cross-fade is
    /// finished first.
    pub fn cross_fade(
        &mut self,
        views: &mut ManagedViews,
        outgoing: Option<Role>,
        incoming: Role,
        now_ms: u64,
    ) {
        self.finish(views);

        views.show(incoming, 0.0);
        views.bring_to_front(incoming);

        let fade = match outgoing.filter(|role| *role != incoming) {
            Some(outgoing) => {
                views.set_opacity(outgoing, 1.0);
                CrossFade::FadingOut {
                    outgoing: Fade::new(outgoing, 1.0, 0.0, now_ms, self.duration_ms),
                    incoming,
                }
            }
            None => CrossFade::FadingIn {
                incoming: Fade::new(incoming, 0.0, 1.0, now_ms, self.duration_ms),
            },
        };
        tracing::trace!(?outgoing, ?incoming, now_ms, "cross-fade started");
        self.running = Some(fade);
    }

    /// Applies opacities for `now_ms`. Returns true if a fade was running.
    pub fn advance(&mut self, views: &mut ManagedViews, now_ms: u64) -> bool {
        let Some(mut fade) = self.running else {
            return false;
        };
        loop {
            match fade {
                CrossFade::FadingOut { outgoing, incoming } => {
                    views.set_opacity(outgoing.role, outgoing.opacity_at(now_ms));
                    if !outgoing.is_done(now_ms) {
                        break;
                    }
                    views.hide(outgoing.role);
                    tracing::trace!(role = ?outgoing.role, "fade-out finished");
                    fade = CrossFade::FadingIn {
                        incoming: Fade::new(
                            incoming,
                            0.0,
                            1.0,
                            outgoing.end_ms(),
                            self.duration_ms,
                        ),
                    };
                }
                CrossFade::FadingIn { incoming } => {
                    views.set_opacity(incoming.role, incoming.opacity_at(now_ms));
                    if incoming.is_done(now_ms) {
                        tracing::trace!(role = ?incoming.role, "fade-in finished");
                        self.running = None;
                        return true;
                    }
                    break;
                }
            }
        }
        self.running = Some(fade);
        true
    }

    /// Cancels both legs and applies the end state at once.
    pub fn finish(&mut self, views: &mut ManagedViews) {
        let Some(fade) = self.running.take() else {
            return;
        };
        if let CrossFade::FadingOut { outgoing, .. } = fade {
            views.set_opacity(outgoing.role, 0.0);
            views.hide(outgoing.role);
        }
        views.show(fade.incoming(), 1.0);
    }
}
