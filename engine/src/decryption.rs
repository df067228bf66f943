use crate::{LweCiphertext, LweSecret, encryption::dot};

impl LweCiphertext {
    /// `b + <a, s>`, i.e. the encoded message plus noise.
    pub fn phase(&self, sk: &LweSecret) -> i32 {
        #[cfg(debug_assertions)]
        {
            assert_eq!(self.n(), sk.n());
        }

        self.body().wrapping_add(dot(self.mask(), &sk.data))
    }

    pub fn decrypt_bit(&self, sk: &LweSecret) -> bool {
        self.phase(sk) > 0
    }
}
