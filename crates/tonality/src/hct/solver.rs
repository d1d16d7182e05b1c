use super::Cam16;
use crate::core::{argb_from_lstar, lstar_from_argb, sanitize_degrees};
use crate::{Argb, Float};

const CHROMA_SEARCH_ENDPOINT: Float = 0.4;
const LIGHTNESS_SEARCH_ENDPOINT: Float = 0.01;
const DE_MAX: Float = 1.0;
const DL_MAX: Float = 0.2;

/// The largest chroma searched. sRGB colors peak well below this bound.
const MAX_CHROMA: Float = 200.0;

/// Find a displayable color with the given hue, chroma, and tone.
///
/// The search varies CAM16's lightness J for the given hue and chroma,
/// clipping each candidate to sRGB. A candidate qualifies if its tone is
/// within [`DL_MAX`] of the requested tone and its clipped appearance is
/// within [`DE_MAX`] of the ideal with the same hue. Of the qualifying
/// candidates, the closest one wins.
fn find_by_j(hue: Float, chroma: Float, tone: Float) -> Option<Argb> {
    let mut low: Float = 0.0;
    let mut high: Float = 100.0;
    let mut best_dl: Float = 1000.0;
    let mut best_de: Float = 1000.0;
    let mut best = None;

    while (low - high).abs() > LIGHTNESS_SEARCH_ENDPOINT {
        let mid = low + (high - low) / 2.0;
        let clipped = Cam16::from_jch(mid, chroma, hue).viewed();
        let clipped_tone = lstar_from_argb(clipped);

        let dl = (tone - clipped_tone).abs();
        if dl < DL_MAX {
            let cam = Cam16::from_argb(clipped);
            let de = cam.distance(&Cam16::from_jch(cam.j(), cam.chroma(), hue));
            if de <= DE_MAX && de <= best_de {
                best_dl = dl;
                best_de = de;
                best = Some(clipped);
            }
        }

        if best_dl == 0.0 && best_de == 0.0 {
            break;
        }

        if clipped_tone < tone {
            low = mid;
        } else {
            high = mid;
        }
    }

    best
}

/// Map hue, chroma, and tone to the sRGB gamut.
///
/// If the requested color is displayable, the result has the same hue,
/// chroma, and tone up to 8-bit rounding. Otherwise, the result preserves
/// hue and tone while reducing chroma with a binary search, until the
/// closest displayable color is found. Grays, black, and white short-circuit
/// the search. If no candidate qualifies at all, the result is the gray with
/// the requested tone. This function always returns an opaque color.
pub(crate) fn solve_to_argb(hue: Float, chroma: Float, tone: Float) -> Argb {
    let tone = if tone.is_nan() { 0.0 } else { tone.clamp(0.0, 100.0) };
    if chroma.is_nan() || chroma < 1.0 || tone.round() <= 0.0 || tone.round() >= 100.0 {
        return argb_from_lstar(tone);
    }

    let hue = if hue.is_finite() { sanitize_degrees(hue) } else { 0.0 };
    let chroma = chroma.min(MAX_CHROMA);

    // The requested chroma is the optimistic first probe.
    if let Some(argb) = find_by_j(hue, chroma, tone) {
        return argb;
    }

    let mut low: Float = 0.0;
    let mut high = chroma;
    let mut answer = None;

    while (low - high).abs() >= CHROMA_SEARCH_ENDPOINT {
        let mid = low + (high - low) / 2.0;
        match find_by_j(hue, mid, tone) {
            Some(argb) => {
                answer = Some(argb);
                low = mid;
            }
            None => high = mid,
        }
    }

    answer.unwrap_or_else(|| argb_from_lstar(tone))
}

#[cfg(test)]
mod test {
    use super::solve_to_argb;
    use crate::core::lstar_from_argb;
    use crate::hct::Cam16;
    use crate::{assert_within, Argb, Float};

    #[test]
    fn test_gray() {
        assert_eq!(solve_to_argb(120.0, 0.0, 0.0), Argb::new(0xff000000));
        assert_eq!(solve_to_argb(120.0, 50.0, 100.0), Argb::new(0xffffffff));
        assert_eq!(solve_to_argb(120.0, 0.5, 50.0), Argb::new(0xff777777));
        assert_eq!(solve_to_argb(120.0, 50.0, -20.0), Argb::new(0xff000000));
        assert_eq!(solve_to_argb(120.0, 50.0, 150.0), Argb::new(0xffffffff));
    }

    #[test]
    fn test_in_gamut() {
        for argb in [0xff6750a4, 0xffff0000, 0xff4285f4] {
            let cam = Cam16::from_argb(Argb::new(argb));
            let tone = lstar_from_argb(Argb::new(argb));
            let solved = solve_to_argb(cam.hue(), cam.chroma(), tone);
            assert_within!(lstar_from_argb(solved), tone, 0.5);
            assert_within!(Cam16::from_argb(solved).hue(), cam.hue(), 1.0);
        }
    }

    #[test]
    fn test_out_of_gamut() {
        let solved = solve_to_argb(282.788, 200.0, 50.0);
        let cam = Cam16::from_argb(solved);
        assert_within!(lstar_from_argb(solved), 50.0, 0.5);
        assert_within!(cam.hue(), 282.788, 2.0);
        assert!(cam.chroma() < 200.0, "chroma should be reduced");
        assert!(cam.chroma() > 30.0, "chroma should stay vivid");

        assert_eq!(solve_to_argb(282.788, 1e300, 50.0), solved);
        assert_eq!(solve_to_argb(282.788, Float::INFINITY, 50.0), solved);
    }
}
