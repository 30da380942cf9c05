/// Bind group index used by every demo pipeline.
pub const BIND_GROUP: u32 = 0;

/// Binding slots inside [`BIND_GROUP`].
///
/// The numbers are a fixed convention shared by WGSL generation and bind group
/// construction; they are deliberately sparse and must not collide.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u32)]
pub enum Binding {
    Texture = 1,
    Sampler = 2,
    Light = 3,
    Matrices = 4,
    Material = 7,
}

impl Binding {
    pub const ALL: [Binding; 5] = [
        Binding::Texture,
        Binding::Sampler,
        Binding::Light,
        Binding::Matrices,
        Binding::Material,
    ];

    #[inline]
    pub const fn index(self) -> u32 {
        self as u32
    }

    /// WGSL resource attribute, e.g. `@group(0) @binding(4)`.
    pub fn wgsl(self) -> String {
        format!("@group({BIND_GROUP}) @binding({})", self.index())
    }
}

/// Vertex shader input locations.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u32)]
pub enum Location {
    Position = 1,
    TexCoord = 2,
    Normal = 3,
}

impl Location {
    #[inline]
    pub const fn index(self) -> u32 {
        self as u32
    }

    /// WGSL input attribute, e.g. `@location(1)`.
    pub fn wgsl(self) -> String {
        format!("@location({})", self.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn binding_slots_are_fixed() {
        assert_eq!(Binding::Matrices.index(), 4);
        assert_eq!(Binding::Light.index(), 3);
        assert_eq!(Binding::Material.index(), 7);
        assert_eq!(Binding::Matrices.wgsl(), "@group(0) @binding(4)");
    }

    #[test]
    fn binding_slots_do_not_collide() {
        let slots: HashSet<u32> = Binding::ALL.iter().map(|b| b.index()).collect();
        assert_eq!(slots.len(), Binding::ALL.len());
    }

    #[test]
    fn locations() {
        assert_eq!(Location::Position.wgsl(), "@location(1)");
        assert_eq!(Location::Normal.index(), 3);
    }
}
