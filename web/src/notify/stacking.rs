use leptos::prelude::*;

pub const NAVBAR_Z_INDEX: i32 = 1030;
pub const NAVBAR_Z_INDEX_UNDER_NOTICE: i32 = 0;

/// Z-index coordination owned by the host page. Renderers report banner
/// notices here; the navbar reads its stacking order from it instead of being
/// mutated by the notification layer.
#[derive(Debug, Clone, Copy)]
pub struct StackingContext {
    visible_notices: RwSignal<usize>,
}

impl StackingContext {
    pub fn new() -> Self {
        Self {
            visible_notices: RwSignal::new(0),
        }
    }

    pub fn notice_shown(&self) {
        self.visible_notices.update(|count| *count += 1);
    }

    pub fn notice_hidden(&self) {
        self.visible_notices
            .update(|count| *count = count.saturating_sub(1));
    }

    pub fn navbar_z_index(&self) -> i32 {
        if self.visible_notices.get() > 0 {
            NAVBAR_Z_INDEX_UNDER_NOTICE
        } else {
            NAVBAR_Z_INDEX
        }
    }
}

impl Default for StackingContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_drops_below_notices_until_all_are_gone() {
        let stacking = StackingContext::new();
        assert_eq!(stacking.navbar_z_index(), NAVBAR_Z_INDEX);

        stacking.notice_shown();
        stacking.notice_shown();
        assert_eq!(stacking.navbar_z_index(), NAVBAR_Z_INDEX_UNDER_NOTICE);

        stacking.notice_hidden();
        assert_eq!(stacking.navbar_z_index(), NAVBAR_Z_INDEX_UNDER_NOTICE);

        stacking.notice_hidden();
        stacking.notice_hidden();
        assert_eq!(stacking.navbar_z_index(), NAVBAR_Z_INDEX);
    }
}
