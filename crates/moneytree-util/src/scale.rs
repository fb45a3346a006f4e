use crate::error::UtilError;

/// Linearly remaps `val` from the `src` range onto the `dst` range.
///
/// Values outside `src` are clipped to the matching `dst` bound rather than
/// extrapolated. A zero-width source range cannot be mapped and surfaces as
/// [`UtilError::DegenerateSourceRange`]; clipping is checked first, so an
/// out-of-range value still clips against a degenerate range.
///
/// ```
/// use moneytree_util::scale;
///
/// assert_eq!(scale(0.0, (0.0, 99.0), (-1.0, 1.0)).unwrap(), -1.0);
/// assert_eq!(scale(-5.0, (0.0, 99.0), (-1.0, 1.0)).unwrap(), -1.0);
/// ```
pub fn scale(val: f64, src: (f64, f64), dst: (f64, f64)) -> Result<f64, UtilError> {
    let (src_lo, src_hi) = src;
    let (dst_lo, dst_hi) = dst;

    if val < src_lo {
        return Ok(dst_lo);
    }
    if val > src_hi {
        return Ok(dst_hi);
    }
    if src_lo == src_hi {
        return Err(UtilError::DegenerateSourceRange { low: src_lo });
    }

    Ok((val - src_lo) / (src_hi - src_lo) * (dst_hi - dst_lo) + dst_lo)
}
