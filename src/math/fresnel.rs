//! Fresnel-Integrale S(x) und C(x).
//!
//! S(x) = ∫₀ˣ sin(π·t²/2) dt, C(x) = ∫₀ˣ cos(π·t²/2) dt.
//!
//! Rationale Approximationen nach Cephes (`fresnl.c`): Potenzreihen für
//! kleine Argumente (x² < 2.5625), asymptotische Hilfsfunktionen f und g
//! für große. Absoluter Fehler deutlich unter 1e-9 über den gesamten
//! Wertebereich.

use std::f64::consts::{FRAC_PI_2, PI};

// ── Cephes-Koeffizienten ────────────────────────────────────────────
// Potenzreihe S(x), Zähler/Nenner in t = x⁴

const SN: [f64; 6] = [
    -2.991_819_194_010_198_537_26e3,
    7.088_400_452_577_385_768_63e5,
    -6.297_414_862_058_625_065_37e7,
    2.548_908_805_733_763_591_04e9,
    -4.429_795_180_596_977_791_03e10,
    3.180_162_978_765_678_179_86e11,
];

const SD: [f64; 6] = [
    2.813_762_688_899_943_156_96e2,
    4.558_478_108_065_325_816_75e4,
    5.173_438_887_700_964_007_30e6,
    4.193_202_458_981_112_311_29e8,
    2.244_117_956_453_409_209_40e10,
    6.073_663_894_900_846_390_49e11,
];

// Potenzreihe C(x), Zähler/Nenner in t = x⁴

const CN: [f64; 6] = [
    -4.988_431_145_735_735_486_51e-8,
    9.504_280_628_298_596_051_34e-6,
    -6.451_914_356_839_650_509_62e-4,
    1.888_433_193_967_038_500_64e-2,
    -2.055_259_009_550_138_917_93e-1,
    9.999_999_999_999_999_988_22e-1,
];

const CD: [f64; 7] = [
    3.999_829_689_724_959_803_67e-12,
    9.154_392_157_746_574_787_99e-10,
    1.250_018_624_795_988_214_74e-7,
    1.222_627_890_241_790_309_97e-5,
    8.680_295_429_417_843_006_06e-4,
    4.121_420_907_221_997_929_36e-2,
    1.000_000_000_000_000_001_18e0,
];

// Asymptotische Hilfsfunktion f, Zähler/Nenner in u = 1/(π·x²)²

const FN: [f64; 10] = [
    4.215_435_550_436_775_465_06e-1,
    1.434_079_197_807_588_852_61e-1,
    1.152_209_550_735_857_588_35e-2,
    3.450_179_397_825_740_279_00e-4,
    4.636_137_492_878_673_220_88e-6,
    3.055_689_837_902_576_058_27e-8,
    1.023_045_141_649_072_334_65e-10,
    1.720_107_432_681_618_288_79e-13,
    1.342_832_762_330_627_589_25e-16,
    3.763_297_112_699_878_890_06e-20,
];

const FD: [f64; 10] = [
    7.515_863_983_533_789_471_75e-1,
    1.168_889_258_591_913_821_42e-1,
    6.440_515_265_088_586_110_05e-3,
    1.559_344_091_641_530_208_73e-4,
    1.846_275_673_489_305_458_70e-6,
    1.126_992_247_639_990_352_61e-8,
    3.601_400_295_893_713_704_04e-11,
    5.887_545_336_215_784_100_10e-14,
    4.520_014_340_741_297_014_96e-17,
    1.254_432_370_900_112_643_84e-20,
];

// Asymptotische Hilfsfunktion g, Zähler/Nenner in u = 1/(π·x²)²

const GN: [f64; 11] = [
    5.044_420_736_433_832_658_87e-1,
    1.971_028_335_255_234_117_09e-1,
    1.876_485_840_925_752_492_93e-2,
    6.840_793_809_153_930_901_72e-4,
    1.151_388_261_118_842_809_31e-5,
    9.828_524_436_884_222_238_54e-8,
    4.453_444_158_617_501_447_38e-10,
    1.082_680_411_390_208_703_18e-12,
    1.375_554_606_332_617_998_68e-15,
    8.363_544_356_306_774_215_31e-19,
    1.869_587_101_627_832_351_06e-22,
];

const GD: [f64; 11] = [
    1.474_957_599_251_283_245_29e0,
    3.377_489_891_200_199_704_51e-1,
    2.536_037_414_203_387_951_22e-2,
    8.146_791_071_843_061_790_49e-4,
    1.275_450_756_677_291_187_02e-5,
    1.043_145_896_575_719_905_85e-7,
    4.606_807_281_465_204_282_11e-10,
    1.102_732_150_662_402_707_57e-12,
    1.387_965_312_595_788_712_58e-15,
    8.391_588_162_831_187_073_63e-19,
    1.869_587_101_627_832_363_42e-22,
];

/// Horner-Schema: coef[0]·xⁿ + … + coef[n]
fn polevl(x: f64, coef: &[f64]) -> f64 {
    let mut result = coef[0];
    for &c in &coef[1..] {
        result = result * x + c;
    }
    result
}

/// Wie `polevl`, mit implizitem Leitkoeffizienten 1.0
fn p1evl(x: f64, coef: &[f64]) -> f64 {
    let mut result = x + coef[0];
    for &c in &coef[1..] {
        result = result * x + c;
    }
    result
}

/// Berechnet beide Fresnel-Integrale `(S(x), C(x))`.
///
/// Beide Funktionen sind ungerade; für x → ±∞ streben sie gegen ±0.5.
pub fn fresnel(x: f64) -> (f64, f64) {
    let xa = x.abs();
    let x2 = xa * xa;

    let (mut ss, mut cc) = if x2 < 2.5625 {
        let t = x2 * x2;
        (
            xa * x2 * polevl(t, &SN) / p1evl(t, &SD),
            xa * polevl(t, &CN) / polevl(t, &CD),
        )
    } else if xa > 36974.0 {
        // Auxiliarfunktionen numerisch erschöpft, Grenzwert 0.5
        (0.5, 0.5)
    } else {
        let t = PI * x2;
        let u = 1.0 / (t * t);
        let f = 1.0 - u * polevl(u, &FN) / p1evl(u, &FD);
        let g = polevl(u, &GN) / (t * p1evl(u, &GD));

        let (sin_half, cos_half) = (FRAC_PI_2 * x2).sin_cos();
        let pi_x = PI * xa;
        (
            0.5 - (f * cos_half + g * sin_half) / pi_x,
            0.5 + (f * sin_half - g * cos_half) / pi_x,
        )
    };

    if x < 0.0 {
        ss = -ss;
        cc = -cc;
    }
    (ss, cc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_fresnel_referenzwerte_potenzreihe() {
        // Tabellenwerte (Abramowitz & Stegun, π/2-Konvention)
        let (s, c) = fresnel(0.5);
        assert_abs_diff_eq!(s, 0.064_732_432_859_999_28, epsilon = 1e-9);
        assert_abs_diff_eq!(c, 0.492_344_225_871_446_39, epsilon = 1e-9);

        let (s, c) = fresnel(1.0);
        assert_abs_diff_eq!(s, 0.438_259_147_390_354_77, epsilon = 1e-9);
        assert_abs_diff_eq!(c, 0.779_893_400_376_822_83, epsilon = 1e-9);
    }

    #[test]
    fn test_fresnel_referenzwerte_asymptotik() {
        let (s, c) = fresnel(2.0);
        assert_abs_diff_eq!(s, 0.343_415_678_363_698_24, epsilon = 1e-9);
        assert_abs_diff_eq!(c, 0.488_253_406_075_340_75, epsilon = 1e-9);

        let (s, c) = fresnel(5.0);
        assert_abs_diff_eq!(s, 0.499_191_381_917_116_89, epsilon = 1e-9);
        assert_abs_diff_eq!(c, 0.563_631_188_704_012_23, epsilon = 1e-9);
    }

    #[test]
    fn test_fresnel_ist_ungerade() {
        let (sp, cp) = fresnel(1.3);
        let (sn, cn) = fresnel(-1.3);
        assert_eq!(sn, -sp);
        assert_eq!(cn, -cp);
    }

    #[test]
    fn test_fresnel_grenzwerte() {
        let (s, c) = fresnel(0.0);
        assert_eq!(s, 0.0);
        assert_eq!(c, 0.0);

        let (s, c) = fresnel(50_000.0);
        assert_eq!(s, 0.5);
        assert_eq!(c, 0.5);

        let (s, c) = fresnel(f64::INFINITY);
        assert_eq!(s, 0.5);
        assert_eq!(c, 0.5);
    }

    #[test]
    fn test_fresnel_stetig_am_branchwechsel() {
        // Übergang Potenzreihe → Asymptotik bei x² = 2.5625
        let below = fresnel(1.6 - 1e-9);
        let above = fresnel(1.6 + 1e-9);
        assert_abs_diff_eq!(below.0, above.0, epsilon = 1e-8);
        assert_abs_diff_eq!(below.1, above.1, epsilon = 1e-8);
    }
}
