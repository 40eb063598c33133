use super::{Role, Visibility};
use crate::pane::Pane;

/// A pane together with the visual properties the layout controls.
pub struct ManagedView {
    pane: Box<dyn Pane>,
    visibility: Visibility,
    opacity: f32,
}

impl ManagedView {
    fn hidden(pane: Box<dyn Pane>) -> Self {
        Self {
            pane,
            visibility: Visibility::Hidden,
            opacity: 1.0,
        }
    }

    pub fn pane(&self) -> &dyn Pane {
        self.pane.as_ref()
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn is_shown(&self) -> bool {
        self.visibility == Visibility::Shown
    }

    fn is_refresh_container(&self) -> bool {
        self.pane.refresh_indicator().is_some()
    }
}

/// The loading, error and success slots and their stacking order.
///
/// A refresh container in the loading slot is not an attached child: it
/// never appears in the stacking order and is drawn as an overlay instead.
pub struct ManagedViews {
    loading: ManagedView,
    error: ManagedView,
    success: ManagedView,
    /// Attached children, back to front.
    stacking: Vec<Role>,
}

impl ManagedViews {
    /// Binds the three panes, all hidden, attached in positional order.
    pub fn new(loading: Box<dyn Pane>, error: Box<dyn Pane>, success: Box<dyn Pane>) -> Self {
        let mut views = Self {
            loading: ManagedView::hidden(loading),
            error: ManagedView::hidden(error),
            success: ManagedView::hidden(success),
            stacking: Vec::with_capacity(3),
        };
        for role in Role::ALL {
            if role == Role::Loading && views.loading.is_refresh_container() {
                continue;
            }
            views.stacking.push(role);
        }
        views
    }

    pub fn get(&self, role: Role) -> &ManagedView {
        match role {
            Role::Loading => &self.loading,
            Role::Error => &self.error,
            Role::Success => &self.success,
        }
    }

    fn get_mut(&mut self, role: Role) -> &mut ManagedView {
        match role {
            Role::Loading => &mut self.loading,
            Role::Error => &mut self.error,
            Role::Success => &mut self.success,
        }
    }

    pub fn pane_mut(&mut self, role: Role) -> &mut dyn Pane {
        self.get_mut(role).pane.as_mut()
    }

    /// Attached children, back to front.
    pub fn children(&self) -> &[Role] {
        &self.stacking
    }

    pub fn is_attached(&self, role: Role) -> bool {
        self.stacking.contains(&role)
    }

    pub fn refresh_mode(&self) -> bool {
        self.loading.is_refresh_container()
    }

    pub fn set_visibility(&mut self, role: Role, visibility: Visibility) {
        self.get_mut(role).visibility = visibility;
    }

    pub fn set_opacity(&mut self, role: Role, opacity: f32) {
        self.get_mut(role).opacity = opacity.clamp(0.0, 1.0);
    }

    pub fn show(&mut self, role: Role, opacity: f32) {
        self.set_visibility(role, Visibility::Shown);
        self.set_opacity(role, opacity);
    }

    pub fn hide(&mut self, role: Role) {
        self.set_visibility(role, Visibility::Hidden);
    }

    /// Moves `role` to the top of the stacking order.
    pub fn bring_to_front(&mut self, role: Role) {
        if let Some(index) = self.stacking.iter().position(|r| *r == role) {
            let role = self.stacking.remove(index);
            self.stacking.push(role);
        }
    }

    /// First attached child that is shown at full opacity.
    pub fn first_fully_visible(&self) -> Option<Role> {
        self.stacking
            .iter()
            .copied()
            .find(|role| self.get(*role).is_shown() && self.get(*role).opacity >= 1.0)
    }

    /// Attached children currently shown.
    pub fn shown(&self) -> Vec<Role> {
        self.stacking
            .iter()
            .copied()
            .filter(|role| self.get(*role).is_shown())
            .collect()
    }

    /// Swaps the pane in `role`, returning the detached one.
    ///
    /// The new pane is attached on top (unless it is a refresh container in
    /// the loading slot) and starts hidden; the caller decides what to show.
    pub fn replace(&mut self, role: Role, pane: Box<dyn Pane>) -> Box<dyn Pane> {
        self.stacking.retain(|r| *r != role);
        let old = std::mem::replace(self.get_mut(role), ManagedView::hidden(pane));
        let overlay = role == Role::Loading && self.loading.is_refresh_container();
        if !overlay {
            self.stacking.push(role);
        }
        old.pane
    }
}
