//! Key tables of the double pinyin schemas.
//!
//! Every table has 27 slots, one per key `a`..`z` plus `;`. The sheng
//! row maps a key to the initial it selects when pressed first (`-` keys
//! cannot open a syllable); the yun row maps a key to the one or two
//! finals it selects when pressed second.

use crate::syllable::{Final, Initial};

pub(super) struct SchemaTable {
    pub sheng: [Option<Initial>; 27],
    pub yun: [[Option<Final>; 2]; 27],
}

macro_rules! sh {
    (-) => {
        None
    };
    ($initial:ident) => {
        Some(Initial::$initial)
    };
}

macro_rules! yn {
    () => {
        [None, None]
    };
    ($yun:ident) => {
        [Some(Final::$yun), None]
    };
    ($yun0:ident, $yun1:ident) => {
        [Some(Final::$yun0), Some(Final::$yun1)]
    };
}

#[rustfmt::skip]
const MSPY: SchemaTable = SchemaTable {
    //       a         b      c      d      e         f      g      h      i      j      k      l      m
    //       n         o      p      q      r         s      t      u      v      w      x      y      z      ;
    sheng: [sh!(Zero), sh!(B), sh!(C), sh!(D), sh!(Zero), sh!(F), sh!(G), sh!(H), sh!(Ch), sh!(J), sh!(K), sh!(L), sh!(M),
            sh!(N), sh!(Zero), sh!(P), sh!(Q), sh!(R), sh!(S), sh!(T), sh!(Sh), sh!(Zh), sh!(W), sh!(X), sh!(Y), sh!(Z), sh!(-)],
    yun: [yn!(A), yn!(Ou), yn!(Iao), yn!(Uang, Iang), yn!(E), yn!(En), yn!(Eng), yn!(Ang), yn!(I), yn!(An), yn!(Ao), yn!(Ai), yn!(Ian),
          yn!(In), yn!(Uo, O), yn!(Un), yn!(Iu), yn!(Uan, Er), yn!(Ong, Iong), yn!(Ue), yn!(U), yn!(Ue, V), yn!(Ia, Ua), yn!(Ie), yn!(Uai, V), yn!(Ei), yn!(Ing)],
};

#[rustfmt::skip]
const ZRM: SchemaTable = SchemaTable {
    sheng: [sh!(Zero), sh!(B), sh!(C), sh!(D), sh!(Zero), sh!(F), sh!(G), sh!(H), sh!(Ch), sh!(J), sh!(K), sh!(L), sh!(M),
            sh!(N), sh!(Zero), sh!(P), sh!(Q), sh!(R), sh!(S), sh!(T), sh!(Sh), sh!(Zh), sh!(W), sh!(X), sh!(Y), sh!(Z), sh!(-)],
    yun: [yn!(A), yn!(Ou), yn!(Iao), yn!(Uang, Iang), yn!(E), yn!(En), yn!(Eng), yn!(Ang), yn!(I), yn!(An), yn!(Ao), yn!(Ai), yn!(Ian),
          yn!(In), yn!(Uo, O), yn!(Un), yn!(Iu), yn!(Uan, Er), yn!(Ong, Iong), yn!(Ue), yn!(U), yn!(V, Ue), yn!(Ia, Ua), yn!(Ie), yn!(Uai, Ing), yn!(Ei), yn!()],
};

#[rustfmt::skip]
const ABC: SchemaTable = SchemaTable {
    sheng: [sh!(Zh), sh!(B), sh!(C), sh!(D), sh!(Ch), sh!(F), sh!(G), sh!(H), sh!(-), sh!(J), sh!(K), sh!(L), sh!(M),
            sh!(N), sh!(Zero), sh!(P), sh!(Q), sh!(R), sh!(S), sh!(T), sh!(-), sh!(Sh), sh!(W), sh!(X), sh!(Y), sh!(Z), sh!(-)],
    yun: [yn!(A), yn!(Ou), yn!(In, Uai), yn!(Ia, Ua), yn!(E), yn!(En), yn!(Eng), yn!(Ang), yn!(I), yn!(An), yn!(Ao), yn!(Ai), yn!(Ue, Ui),
          yn!(Un), yn!(Uo, O), yn!(Uan), yn!(Ei), yn!(Er, Iu), yn!(Ong, Iong), yn!(Iang, Uang), yn!(U), yn!(V, Ue), yn!(Ian), yn!(Ie), yn!(Ing), yn!(Iao), yn!()],
};

#[rustfmt::skip]
const ZGPY: SchemaTable = SchemaTable {
    sheng: [sh!(Ch), sh!(B), sh!(C), sh!(D), sh!(Zero), sh!(F), sh!(G), sh!(H), sh!(Sh), sh!(J), sh!(K), sh!(L), sh!(M),
            sh!(N), sh!(Zero), sh!(P), sh!(Q), sh!(R), sh!(S), sh!(T), sh!(Zh), sh!(-), sh!(W), sh!(X), sh!(Y), sh!(Z), sh!(-)],
    yun: [yn!(A), yn!(Iao), yn!(Ing), yn!(Uai), yn!(E), yn!(En), yn!(Eng), yn!(Ang), yn!(I), yn!(An), yn!(Ao), yn!(Ai), yn!(Ian),
          yn!(In), yn!(Uo, O), yn!(Ou), yn!(Ei, Er), yn!(Iu), yn!(Ong, Iong), yn!(Uan), yn!(U), yn!(V, Ue), yn!(Ia, Ua), yn!(Ie), yn!(Uang, Iang), yn!(Un), yn!(Ui)],
};

#[rustfmt::skip]
const PYJJ: SchemaTable = SchemaTable {
    sheng: [sh!(Zero), sh!(B), sh!(C), sh!(D), sh!(Zero), sh!(F), sh!(G), sh!(H), sh!(Sh), sh!(J), sh!(K), sh!(L), sh!(M),
            sh!(N), sh!(Zero), sh!(P), sh!(Q), sh!(R), sh!(S), sh!(T), sh!(Ch), sh!(Zh), sh!(W), sh!(X), sh!(Y), sh!(Z), sh!(-)],
    yun: [yn!(A), yn!(Ia, Ua), yn!(Uan), yn!(Ao), yn!(E), yn!(An), yn!(Ang), yn!(Iang, Uang), yn!(I), yn!(Ian), yn!(Iao), yn!(In), yn!(Ie),
          yn!(Iu), yn!(Uo, O), yn!(Ou), yn!(Er, Ing), yn!(En), yn!(Ai), yn!(Eng), yn!(U), yn!(V, Ui), yn!(Ei), yn!(Uai, Ue), yn!(Un), yn!(Ong, Iong), yn!()],
};

#[rustfmt::skip]
const XHE: SchemaTable = SchemaTable {
    sheng: [sh!(Zero), sh!(B), sh!(C), sh!(D), sh!(Zero), sh!(F), sh!(G), sh!(H), sh!(Ch), sh!(J), sh!(K), sh!(L), sh!(M),
            sh!(N), sh!(Zero), sh!(P), sh!(Q), sh!(R), sh!(S), sh!(T), sh!(Sh), sh!(Zh), sh!(W), sh!(X), sh!(Y), sh!(Z), sh!(-)],
    yun: [yn!(A), yn!(In), yn!(Ao), yn!(Ai), yn!(E), yn!(En), yn!(Eng), yn!(Ang), yn!(I), yn!(An), yn!(Uai, Ing), yn!(Iang, Uang), yn!(Ian),
          yn!(Iao), yn!(Uo, O), yn!(Ie), yn!(Iu), yn!(Uan, Er), yn!(Ong, Iong), yn!(Ue), yn!(U), yn!(V, Ui), yn!(Ei), yn!(Ia, Ua), yn!(Un), yn!(Ou), yn!()],
};

pub(super) static SCHEMAS: [SchemaTable; 6] = [MSPY, ZRM, ABC, ZGPY, PYJJ, XHE];
