// Simulated wallpaper-engine telemetry. Nothing here measures anything;
// the numbers only have to look plausible on the monitor panel.

use crate::model::PerformanceSample;

/// Build a sample from four uniform rolls in [0, 1).
/// Ranges: fps 50..70, memory 40..70 %, cpu 15..55 %, battery 70..85 %.
pub fn from_rolls(fps: f64, memory: f64, cpu: f64, battery: f64) -> PerformanceSample {
    PerformanceSample {
        fps: (fps * 20.0).floor() as u32 + 50,
        memory: (memory * 30.0).floor() as u32 + 40,
        cpu: (cpu * 40.0).floor() as u32 + 15,
        battery: (battery * 15.0).floor() as u32 + 70,
    }
}

pub fn random() -> PerformanceSample {
    from_rolls(
        js_sys::Math::random(),
        js_sys::Math::random(),
        js_sys::Math::random(),
        js_sys::Math::random(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_stay_in_documented_ranges() {
        for r in [0.0, 0.25, 0.5, 0.75, 0.999_999] {
            let s = from_rolls(r, r, r, r);
            assert!((50..70).contains(&s.fps));
            assert!((40..70).contains(&s.memory));
            assert!((15..55).contains(&s.cpu));
            assert!((70..85).contains(&s.battery));
        }
    }

    #[test]
    fn extremes_hit_the_bounds() {
        let lo = from_rolls(0.0, 0.0, 0.0, 0.0);
        assert_eq!((lo.fps, lo.memory, lo.cpu, lo.battery), (50, 40, 15, 70));
        let hi = from_rolls(0.999_999, 0.999_999, 0.999_999, 0.999_999);
        assert_eq!((hi.fps, hi.memory, hi.cpu, hi.battery), (69, 69, 54, 84));
    }
}
