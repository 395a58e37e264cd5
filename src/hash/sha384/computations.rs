pub use super::K512;

#[inline(always)]
pub fn small_sigma0(x: u64) -> u64 {
    x.rotate_right(1) ^ x.rotate_right(8) ^ (x >> 7)
}

#[inline(always)]
pub fn small_sigma1(x: u64) -> u64 {
    x.rotate_right(19) ^ x.rotate_right(61) ^ (x >> 6)
}

#[inline(always)]
pub fn big_sigma0(x: u64) -> u64 {
    x.rotate_right(28) ^ x.rotate_right(34) ^ x.rotate_right(39)
}

#[inline(always)]
pub fn big_sigma1(x: u64) -> u64 {
    x.rotate_right(14) ^ x.rotate_right(18) ^ x.rotate_right(41)
}

#[inline(always)]
pub fn ch(e: u64, f: u64, g: u64) -> u64 {
    (e & f) ^ ((!e) & g)
}

#[inline(always)]
pub fn maj(a: u64, b: u64, c: u64) -> u64 {
    (a & b) ^ (a & c) ^ (b & c)
}

/// Next message schedule word, written over `w[i & 15]`.
///
/// The schedule is kept as a rolling window of sixteen words: slot
/// `i & 15` still holds `W[i - 16]` when round `i` starts.
#[inline(always)]
fn schedule(w: &mut [u64; 16], i: usize) -> u64 {
    let w16 = w[(i - 16) & 15];
    let w15 = w[(i - 15) & 15];
    let w7 = w[(i - 7) & 15];
    let w2 = w[(i - 2) & 15];

    let next = small_sigma1(w2)
        .wrapping_add(w7)
        .wrapping_add(small_sigma0(w15))
        .wrapping_add(w16);

    w[i & 15] = next;
    next
}

/// Runs the 80 SHA-512 rounds over one block and folds the result into
/// `state`.
///
/// `w` holds the sixteen big-endian words of the block. With the `speed`
/// feature the fully unrolled rounds are used; both paths give the same
/// state.
#[inline(always)]
pub fn all_rounds(state: &mut [u64; 8], w: [u64; 16]) {
    #[cfg(not(feature = "speed"))]
    rounds_looped(state, w);

    #[cfg(feature = "speed")]
    rounds_unrolled(state, w);
}

#[cfg(any(test, not(feature = "speed")))]
fn rounds_looped(state: &mut [u64; 8], mut w: [u64; 16]) {
    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];
    let mut f = state[5];
    let mut g = state[6];
    let mut h = state[7];

    for i in 0..80 {
        let wi = if i < 16 { w[i] } else { schedule(&mut w, i) };

        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(K512[i])
            .wrapping_add(wi);

        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
    state[5] = state[5].wrapping_add(f);
    state[6] = state[6].wrapping_add(g);
    state[7] = state[7].wrapping_add(h);
}

#[cfg(any(test, feature = "speed"))]
fn rounds_unrolled(state: &mut [u64; 8], mut w: [u64; 16]) {
    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];
    let mut f = state[5];
    let mut g = state[6];
    let mut h = state[7];

    // Instead of shuffling the eight variables each round, the macro is
    // called with them rotated one position per round.
    macro_rules! R {
        ($i:expr, $a:ident, $b:ident, $c:ident, $d:ident, $e:ident, $f:ident, $g:ident, $h:ident) => {{
            let wi = if $i < 16 { w[$i & 15] } else { schedule(&mut w, $i) };

            let t1 = $h
                .wrapping_add(big_sigma1($e))
                .wrapping_add(ch($e, $f, $g))
                .wrapping_add(K512[$i])
                .wrapping_add(wi);

            let t2 = big_sigma0($a).wrapping_add(maj($a, $b, $c));

            $d = $d.wrapping_add(t1);
            $h = t1.wrapping_add(t2);
        }};
    }

    macro_rules! R8 {
        ($i:expr) => {{
            R!($i, a, b, c, d, e, f, g, h);
            R!($i + 1, h, a, b, c, d, e, f, g);
            R!($i + 2, g, h, a, b, c, d, e, f);
            R!($i + 3, f, g, h, a, b, c, d, e);
            R!($i + 4, e, f, g, h, a, b, c, d);
            R!($i + 5, d, e, f, g, h, a, b, c);
            R!($i + 6, c, d, e, f, g, h, a, b);
            R!($i + 7, b, c, d, e, f, g, h, a);
        }};
    }

    R8!(0);
    R8!(8);

    R8!(16);
    R8!(24);
    R8!(32);
    R8!(40);
    R8!(48);
    R8!(56);
    R8!(64);
    R8!(72);

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
    state[5] = state[5].wrapping_add(f);
    state[6] = state[6].wrapping_add(g);
    state[7] = state[7].wrapping_add(h);
}
