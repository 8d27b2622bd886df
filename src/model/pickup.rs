use glam::Vec3;

use super::bounds::Aabb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collectible {
    Blue,
    Red,
    Green,
    Yellow,
}

impl Collectible {
    pub const ALL: [Collectible; 4] = [
        Collectible::Blue,
        Collectible::Red,
        Collectible::Green,
        Collectible::Yellow,
    ];

    pub fn index(self) -> usize {
        match self {
            Collectible::Blue => 0,
            Collectible::Red => 1,
            Collectible::Green => 2,
            Collectible::Yellow => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Collectible::Blue => "Blue card",
            Collectible::Red => "Red card",
            Collectible::Green => "Green card",
            Collectible::Yellow => "Yellow card",
        }
    }
}

/// World-space box the hand has to reach into to pick a card up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickupVolume {
    pub collectible: Collectible,
    pub label: &'static str,
    pub bounds: Aabb,
}

impl PickupVolume {
    pub const fn new(collectible: Collectible, label: &'static str, min: Vec3, max: Vec3) -> Self {
        Self { collectible, label, bounds: Aabb::new(min, max) }
    }

    pub fn contains(&self, hand: Vec3) -> bool {
        self.bounds.contains(hand)
    }
}

/// Where each key card is hidden in the room.
pub const PICKUP_TABLE: [PickupVolume; 4] = [
    PickupVolume::new(
        Collectible::Blue,
        "Blue card",
        Vec3::new(-3.9, 0.01, -3.56),
        Vec3::new(-3.2, 0.10, -3.0),
    ),
    PickupVolume::new(
        Collectible::Red,
        "Red card",
        Vec3::new(3.3, 0.9, -4.4),
        Vec3::new(3.9, 1.2, -3.9),
    ),
    PickupVolume::new(
        Collectible::Green,
        "Green card",
        Vec3::new(-3.6, 4.4, -5.2),
        Vec3::new(-3.0, 5.2, -4.4),
    ),
    PickupVolume::new(
        Collectible::Yellow,
        "Yellow card",
        Vec3::new(2.0, 0.4, 2.5),
        Vec3::new(2.6, 1.2, 3.2),
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_each_collectible_once() {
        for c in Collectible::ALL {
            let hits = PICKUP_TABLE.iter().filter(|v| v.collectible == c).count();
            assert_eq!(hits, 1, "{c:?}");
            assert_eq!(PICKUP_TABLE[c.index()].collectible, c);
            assert_eq!(PICKUP_TABLE[c.index()].label, c.label());
        }
    }

    #[test]
    fn volumes_do_not_overlap() {
        for a in &PICKUP_TABLE {
            for b in &PICKUP_TABLE {
                if a.collectible != b.collectible {
                    assert!(!a.contains(b.bounds.center()));
                }
            }
        }
    }

    #[test]
    fn blue_volume_bounds_are_inclusive() {
        let blue = &PICKUP_TABLE[Collectible::Blue.index()];
        assert!(blue.contains(Vec3::new(-3.9, 0.01, -3.56)));
        assert!(blue.contains(Vec3::new(-3.2, 0.10, -3.0)));
        assert!(!blue.contains(Vec3::new(-3.19, 0.05, -3.2)));
    }
}
