use std::marker::PhantomData;

use tower_core::{AdditiveIdentity, InnerProductSpace};

/// Inner-product axiom checks over supplied values.
///
/// Each check is independent and returns whether the axiom holds for the
/// given witnesses; none of them quantify over the whole space.
#[derive(Debug)]
pub struct VerifyInnerProduct<V: InnerProductSpace>(PhantomData<V>);

impl<V: InnerProductSpace> VerifyInnerProduct<V> {
    /// `⟨u,v⟩ = ⟨v,u⟩`.
    pub fn commutative(u: &V, v: &V) -> bool {
        u.inner(v) == v.inner(u)
    }

    /// `⟨au + bv, w⟩ = a⟨u,w⟩ + b⟨v,w⟩`.
    pub fn linear(a: &V::Scalar, u: &V, b: &V::Scalar, v: &V, w: &V) -> bool {
        let lhs = (u.scale(a) + v.scale(b)).inner(w);
        let rhs = a.clone() * u.inner(w) + b.clone() * v.inner(w);
        lhs == rhs
    }

    /// `⟨v,v⟩ ≥ 0`.
    pub fn positive_definite(v: &V) -> bool {
        v.inner(v) >= <V::Scalar as AdditiveIdentity>::zero()
    }

    /// `⟨u,v⟩² ≤ ⟨u,u⟩⟨v,v⟩`.
    pub fn cauchy_schwarz(u: &V, v: &V) -> bool {
        let uv = u.inner(v);
        let uu = u.inner(u);
        let vv = v.inner(v);
        uv.clone() * uv <= uu * vv
    }

    /// Runs every check on the triple `(u, v, w)` with scalars `a`, `b`.
    pub fn all(a: &V::Scalar, b: &V::Scalar, u: &V, v: &V, w: &V) -> bool {
        Self::commutative(u, v)
            && Self::linear(a, u, b, v, w)
            && Self::positive_definite(u)
            && Self::positive_definite(v)
            && Self::cauchy_schwarz(u, v)
    }
}
