//! Screen orientation state and the per-rotation register table.

/// Whether the logical frame is wider than tall (native) or swapped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OrientationFlag {
    Landscape,
    Portrait,
}

/// Rotation relative to the native panel orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

/// Values of the three registers that encode scan and entry direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RotationRegisters {
    /// Gate scan control (0x60), bit 15 flips the gate scan
    pub gate_scan: u16,
    /// Driver output control (0x01), bit 8 flips the source scan
    pub driver_output: u16,
    /// Entry mode (0x03), bits 5..3 select the address update direction
    pub entry_mode: u16,
}

const ROTATION_TABLE: [RotationRegisters; 4] = [
    RotationRegisters {
        gate_scan: 0xA700,
        driver_output: 0x0000,
        entry_mode: 0x1038,
    },
    RotationRegisters {
        gate_scan: 0x2700,
        driver_output: 0x0000,
        entry_mode: 0x1030,
    },
    RotationRegisters {
        gate_scan: 0x2700,
        driver_output: 0x0100,
        entry_mode: 0x1038,
    },
    RotationRegisters {
        gate_scan: 0xA700,
        driver_output: 0x0100,
        entry_mode: 0x1030,
    },
];

impl Rotation {
    /// Accepts 0, 90, 180, 270 and 360 (same as 0)
    pub fn from_degrees(degrees: u16) -> Option<Self> {
        match degrees {
            0 | 360 => Some(Rotation::Deg0),
            90 => Some(Rotation::Deg90),
            180 => Some(Rotation::Deg180),
            270 => Some(Rotation::Deg270),
            _ => None,
        }
    }

    pub fn degrees(self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    pub fn flag(self) -> OrientationFlag {
        match self {
            Rotation::Deg0 | Rotation::Deg180 => OrientationFlag::Landscape,
            Rotation::Deg90 | Rotation::Deg270 => OrientationFlag::Portrait,
        }
    }

    pub fn registers(self) -> RotationRegisters {
        ROTATION_TABLE[self as usize]
    }
}

/// Current logical resolution and rotation of the screen
///
/// `width` and `height` always describe the rotated frame as seen by drawing
/// code, never the native panel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayOrientation {
    pub width: u16,
    pub height: u16,
    pub flag: OrientationFlag,
    pub rotation: Rotation,
}

impl DisplayOrientation {
    /// Orientation of an uninitialized controller: zero-sized, native rotation
    pub const fn unset() -> Self {
        Self {
            width: 0,
            height: 0,
            flag: OrientationFlag::Landscape,
            rotation: Rotation::Deg0,
        }
    }

    /// Orientation for a panel with the given native size, rotated by `rotation`
    pub fn rotated(native_width: u16, native_height: u16, rotation: Rotation) -> Self {
        let (width, height) = match rotation.flag() {
            OrientationFlag::Landscape => (native_width, native_height),
            OrientationFlag::Portrait => (native_height, native_width),
        };
        Self {
            width,
            height,
            flag: rotation.flag(),
            rotation,
        }
    }

    pub fn is_portrait(&self) -> bool {
        self.flag == OrientationFlag::Portrait
    }

    /// Whether the logical coordinate lies on screen
    pub fn contains(&self, w: u16, h: u16) -> bool {
        w < self.width && h < self.height
    }

    /// Map a logical coordinate pair to the controller's fixed native axes
    pub fn to_hardware(&self, w: u16, h: u16) -> (u16, u16) {
        match self.flag {
            OrientationFlag::Landscape => (w, h),
            OrientationFlag::Portrait => (h, w),
        }
    }
}

impl Default for DisplayOrientation {
    fn default() -> Self {
        Self::unset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_supported_degrees_only() {
        assert_eq!(Rotation::from_degrees(0), Some(Rotation::Deg0));
        assert_eq!(Rotation::from_degrees(360), Some(Rotation::Deg0));
        assert_eq!(Rotation::from_degrees(90), Some(Rotation::Deg90));
        assert_eq!(Rotation::from_degrees(180), Some(Rotation::Deg180));
        assert_eq!(Rotation::from_degrees(270), Some(Rotation::Deg270));
        for bad in [1, 45, 89, 91, 359, 361, 720, u16::MAX] {
            assert_eq!(Rotation::from_degrees(bad), None);
        }
    }

    #[test]
    fn register_table_matches_controller_documentation() {
        let expected = [
            (Rotation::Deg0, 0xA700, 0x0000, 0x1038),
            (Rotation::Deg90, 0x2700, 0x0000, 0x1030),
            (Rotation::Deg180, 0x2700, 0x0100, 0x1038),
            (Rotation::Deg270, 0xA700, 0x0100, 0x1030),
        ];
        for (rotation, gate_scan, driver_output, entry_mode) in expected {
            let regs = rotation.registers();
            assert_eq!(regs.gate_scan, gate_scan);
            assert_eq!(regs.driver_output, driver_output);
            assert_eq!(regs.entry_mode, entry_mode);
        }
    }

    #[test]
    fn portrait_rotations_swap_dimensions() {
        let o = DisplayOrientation::rotated(320, 240, Rotation::Deg90);
        assert_eq!((o.width, o.height), (240, 320));
        assert!(o.is_portrait());
        assert_eq!(o.to_hardware(5, 7), (7, 5));

        let o = DisplayOrientation::rotated(320, 240, Rotation::Deg180);
        assert_eq!((o.width, o.height), (320, 240));
        assert!(!o.is_portrait());
        assert_eq!(o.to_hardware(5, 7), (5, 7));
    }

    proptest! {
        #[test]
        fn on_screen_points_land_inside_native_panel(
            degrees in prop::sample::select(vec![0u16, 90, 180, 270]),
            w in 0u16..400,
            h in 0u16..400,
        ) {
            let rotation = Rotation::from_degrees(degrees).unwrap();
            let o = DisplayOrientation::rotated(320, 240, rotation);
            prop_assume!(o.contains(w, h));
            let (nw, nh) = o.to_hardware(w, h);
            prop_assert!(nw < 320 && nh < 240);
        }
    }
}
