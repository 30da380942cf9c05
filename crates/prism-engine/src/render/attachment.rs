/// Holds one resource tied to a 2D size and replaces it lazily.
///
/// `ensure` keeps the current value while the requested size matches and
/// otherwise releases the old value before creating a new one. This is the
/// only resize policy the frame loop needs: attachments follow the acquired
/// surface image without a dedicated resize hook.
#[derive(Debug)]
pub struct ResizeSlot<T> {
    slot: Option<(T, (u32, u32))>,
}

impl<T> Default for ResizeSlot<T> {
    fn default() -> Self {
        Self { slot: None }
    }
}

impl<T> ResizeSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value sized for `size`, creating it if absent or stale.
    ///
    /// The flag is `true` when `create` ran during this call.
    pub fn ensure<C, D>(&mut self, size: (u32, u32), create: C, destroy: D) -> (&T, bool)
    where
        C: FnOnce((u32, u32)) -> T,
        D: FnOnce(T),
    {
        let stale = self.slot.as_ref().is_none_or(|(_, s)| *s != size);
        if stale {
            if let Some((old, _)) = self.slot.take() {
                destroy(old);
            }
        }

        let mut created = false;
        let (value, _) = self.slot.get_or_insert_with(|| {
            created = true;
            (create(size), size)
        });
        (value, created)
    }

    pub fn get(&self) -> Option<&T> {
        self.slot.as_ref().map(|(v, _)| v)
    }

    pub fn size(&self) -> Option<(u32, u32)> {
        self.slot.as_ref().map(|(_, s)| *s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reallocates_only_when_size_changes() {
        let mut slot = ResizeSlot::new();
        let mut created = Vec::new();
        let mut destroyed = Vec::new();

        for size in [(100, 100), (100, 100), (200, 150)] {
            slot.ensure(
                size,
                |s| {
                    created.push(s);
                    s
                },
                |old| destroyed.push(old),
            );
        }

        assert_eq!(created, vec![(100, 100), (200, 150)]);
        assert_eq!(destroyed, vec![(100, 100)]);
        assert_eq!(slot.size(), Some((200, 150)));
    }

    #[test]
    fn reports_fresh_allocations() {
        let mut slot: ResizeSlot<u32> = ResizeSlot::new();
        let flags: Vec<bool> = [(100, 100), (100, 100), (200, 150)]
            .into_iter()
            .map(|size| slot.ensure(size, |(w, h)| w * h, drop).1)
            .collect();
        assert_eq!(flags, vec![true, false, true]);
        assert_eq!(slot.get(), Some(&30_000));
    }

    #[test]
    fn width_or_height_change_alone_is_stale() {
        let mut slot: ResizeSlot<()> = ResizeSlot::new();
        assert!(slot.ensure((10, 10), |_| (), drop).1);
        assert!(slot.ensure((10, 11), |_| (), drop).1);
        assert!(slot.ensure((11, 11), |_| (), drop).1);
    }
}
