use itertools::izip;
use sampling::source::Source;

use crate::{EngineResult, LweCiphertext, LweSecret, SIX_SIGMA, TORUS_SCALE, params::gaussian};

impl LweCiphertext {
    /// Encrypts the torus message `mu` under `sk`.
    ///
    /// The mask is drawn from `source_xa` and the noise from `source_xe`,
    /// a centered Gaussian of standard deviation `sigma` (torus fraction)
    /// truncated at six sigma. The body is `mu - <a, s> + e`.
    pub fn encrypt_sk(
        &mut self,
        mu: i32,
        sk: &LweSecret,
        source_xa: &mut Source,
        source_xe: &mut Source,
        sigma: f64,
    ) -> EngineResult<()> {
        #[cfg(debug_assertions)]
        {
            assert_eq!(self.n(), sk.n())
        }

        let noise = gaussian(sigma)?;

        self.data[1..].iter_mut().for_each(|a| *a = source_xa.next_i32());

        let e: i32 = (source_xe.next_normal(&noise, sigma * SIX_SIGMA) * TORUS_SCALE).round() as i64 as i32;

        self.data[0] = mu.wrapping_sub(dot(&self.data[1..], &sk.data)).wrapping_add(e);
        Ok(())
    }
}

/// `<a, s>` on the torus.
#[inline(always)]
pub(crate) fn dot(a: &[i32], s: &[i32]) -> i32 {
    izip!(a, s).fold(0i32, |acc, (x, y)| acc.wrapping_add(x.wrapping_mul(*y)))
}
