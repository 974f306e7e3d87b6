//! Reference twelve-step families the scale generator learns its chroma
//! profile from. Light and dark variants, sRGB.

use once_cell::sync::Lazy;
use palette::Oklch;

use crate::convert::{hex_to_oklch, Hex};
use crate::scale::ArrayOf12;

pub(crate) struct ReferenceScale {
    pub name: &'static str,
    pub steps: ArrayOf12<Oklch>,
}

struct Family {
    name: &'static str,
    gray: bool,
    light: ArrayOf12<u32>,
    dark: ArrayOf12<u32>,
}

static LIGHT_SCALES: Lazy<Vec<ReferenceScale>> = Lazy::new(|| build(|f| &f.light, |_| true));
static DARK_SCALES: Lazy<Vec<ReferenceScale>> = Lazy::new(|| build(|f| &f.dark, |_| true));
static LIGHT_GRAY_SCALES: Lazy<Vec<ReferenceScale>> = Lazy::new(|| build(|f| &f.light, |f| f.gray));
static DARK_GRAY_SCALES: Lazy<Vec<ReferenceScale>> = Lazy::new(|| build(|f| &f.dark, |f| f.gray));

fn build(
    variant: impl Fn(&Family) -> &ArrayOf12<u32>,
    include: impl Fn(&Family) -> bool,
) -> Vec<ReferenceScale> {
    FAMILIES
        .iter()
        .filter(|family| include(family))
        .map(|family| ReferenceScale {
            name: family.name,
            steps: (*variant(family)).map(|packed| hex_to_oklch(Hex::from_u32(packed))),
        })
        .collect()
}

pub(crate) fn light_scales() -> &'static [ReferenceScale] {
    &LIGHT_SCALES
}

pub(crate) fn dark_scales() -> &'static [ReferenceScale] {
    &DARK_SCALES
}

pub(crate) fn light_gray_scales() -> &'static [ReferenceScale] {
    &LIGHT_GRAY_SCALES
}

pub(crate) fn dark_gray_scales() -> &'static [ReferenceScale] {
    &DARK_GRAY_SCALES
}

pub(crate) fn is_gray_family(name: &str) -> bool {
    FAMILIES.iter().any(|family| family.gray && family.name == name)
}

#[rustfmt::skip]
const FAMILIES: &[Family] = &[
    Family {
        name: "gray", gray: true,
        light: [0xfcfcfc, 0xf9f9f9, 0xf0f0f0, 0xe8e8e8, 0xe0e0e0, 0xd9d9d9, 0xcecece, 0xbbbbbb, 0x8d8d8d, 0x838383, 0x646464, 0x202020],
        dark:  [0x111111, 0x191919, 0x222222, 0x2a2a2a, 0x313131, 0x3a3a3a, 0x484848, 0x606060, 0x6e6e6e, 0x7b7b7b, 0xb4b4b4, 0xeeeeee],
    },
    Family {
        name: "mauve", gray: true,
        light: [0xfdfcfd, 0xfaf9fb, 0xf2eff3, 0xeae7ec, 0xe3dfe6, 0xdbd8e0, 0xd0cdd7, 0xbcbac7, 0x8e8c99, 0x84828e, 0x65636d, 0x211f26],
        dark:  [0x121113, 0x1a191b, 0x232225, 0x2b292d, 0x323035, 0x3c393f, 0x49474e, 0x625f69, 0x6f6d78, 0x7c7a85, 0xb5b2bc, 0xeeeef0],
    },
    Family {
        name: "slate", gray: true,
        light: [0xfcfcfd, 0xf9f9fb, 0xf0f0f3, 0xe8e8ec, 0xe0e1e6, 0xd9d9e0, 0xcdced6, 0xb9bbc6, 0x8b8d98, 0x80838d, 0x60646c, 0x1c2024],
        dark:  [0x111113, 0x18191b, 0x212225, 0x272a2d, 0x2e3135, 0x363a3f, 0x43484e, 0x5a6169, 0x696e77, 0x777b84, 0xb0b4ba, 0xedeef0],
    },
    Family {
        name: "sage", gray: true,
        light: [0xfbfdfc, 0xf7f9f8, 0xeef1f0, 0xe6e9e8, 0xdfe2e0, 0xd7dad9, 0xcbcfcd, 0xb8bcba, 0x868e8b, 0x7c8481, 0x5f6563, 0x1a211e],
        dark:  [0x101211, 0x171918, 0x202221, 0x272a29, 0x2e3130, 0x373b39, 0x444947, 0x5b625f, 0x63706b, 0x717d79, 0xadb5b2, 0xeceeed],
    },
    Family {
        name: "olive", gray: true,
        light: [0xfcfdfc, 0xf8faf8, 0xeff1ef, 0xe7e9e7, 0xdfe2df, 0xd7dad7, 0xcccfcc, 0xb9bcb8, 0x898e87, 0x7f847d, 0x60655f, 0x1d211c],
        dark:  [0x111210, 0x181917, 0x212220, 0x282a27, 0x2f312e, 0x383a36, 0x454843, 0x5c625b, 0x687066, 0x767d74, 0xafb5ad, 0xeceeec],
    },
    Family {
        name: "sand", gray: true,
        light: [0xfdfdfc, 0xf9f9f8, 0xf1f0ef, 0xe9e8e6, 0xe2e1de, 0xdad9d6, 0xcfceca, 0xbcbbb5, 0x8d8d86, 0x82827c, 0x63635e, 0x21201c],
        dark:  [0x111110, 0x191918, 0x222221, 0x2a2a28, 0x31312e, 0x3b3a37, 0x494844, 0x62605b, 0x6f6d66, 0x7c7b74, 0xb5b3ad, 0xeeeeec],
    },
    Family {
        name: "tomato", gray: false,
        light: [0xfffcfc, 0xfff8f7, 0xfeebe7, 0xffdcd3, 0xffcdc2, 0xfdbdaf, 0xf5a898, 0xec8e7b, 0xe54d2e, 0xdd4425, 0xd13415, 0x5c271f],
        dark:  [0x181111, 0x1f1513, 0x391714, 0x4e1511, 0x5e1c16, 0x6e2920, 0x853a2d, 0xac4d39, 0xe54d2e, 0xec6142, 0xff977d, 0xfbd3cb],
    },
    Family {
        name: "red", gray: false,
        light: [0xfffcfc, 0xfff7f7, 0xfeebec, 0xffdbdc, 0xffcdce, 0xfdbdbe, 0xf4a9aa, 0xeb8e90, 0xe5484d, 0xdc3e42, 0xce2c31, 0x641723],
        dark:  [0x191111, 0x201314, 0x3b1219, 0x500f1c, 0x611623, 0x72232d, 0x8c333a, 0xb54548, 0xe5484d, 0xec5d5e, 0xff9592, 0xffd1d9],
    },
    Family {
        name: "ruby", gray: false,
        light: [0xfffcfd, 0xfff7f8, 0xfeeaed, 0xffdce1, 0xffced6, 0xf8bfc8, 0xefacb8, 0xe592a3, 0xe54666, 0xdc3b5d, 0xca244d, 0x64172b],
        dark:  [0x191113, 0x1e1517, 0x3a141e, 0x4e1325, 0x5e1a2e, 0x6f2539, 0x883447, 0xb3445a, 0xe54666, 0xec5a72, 0xff949d, 0xfed2e1],
    },
    Family {
        name: "crimson", gray: false,
        light: [0xfffcfd, 0xfef7f9, 0xffe9f0, 0xfedce7, 0xfacedd, 0xf3bed1, 0xeaacc3, 0xe093b2, 0xe93d82, 0xdf3478, 0xcb1d63, 0x621639],
        dark:  [0x191114, 0x201318, 0x381525, 0x4d122f, 0x5c1839, 0x6d2545, 0x873356, 0xb0436e, 0xe93d82, 0xee518a, 0xff92ad, 0xfdd3e8],
    },
    Family {
        name: "pink", gray: false,
        light: [0xfffcfe, 0xfef7fb, 0xfee9f5, 0xfbdcef, 0xf6cee7, 0xefbfdd, 0xe7acd0, 0xdd93c2, 0xd6409f, 0xcf3897, 0xc2298a, 0x651249],
        dark:  [0x191117, 0x21121d, 0x37172f, 0x4b143d, 0x591c47, 0x692955, 0x833869, 0xa84885, 0xd6409f, 0xde51a8, 0xff8dcc, 0xfdd1ea],
    },
    Family {
        name: "plum", gray: false,
        light: [0xfefcff, 0xfdf7fd, 0xfbebfb, 0xf7def8, 0xf2d1f3, 0xe9c2ec, 0xdeade3, 0xcf91d8, 0xab4aba, 0xa144af, 0x953ea3, 0x53195d],
        dark:  [0x181118, 0x201320, 0x351a35, 0x451d47, 0x512454, 0x5e3061, 0x734079, 0x92549c, 0xab4aba, 0xb658c4, 0xe796f3, 0xf4d4f4],
    },
    Family {
        name: "purple", gray: false,
        light: [0xfefcfe, 0xfbf7fe, 0xf7edfe, 0xf2e2fc, 0xead5f9, 0xe0c4f4, 0xd1afec, 0xbe93e4, 0x8e4ec6, 0x8347b9, 0x8145b5, 0x402060],
        dark:  [0x18111b, 0x1e1523, 0x301c3b, 0x3d224e, 0x48295c, 0x54346b, 0x664282, 0x8457aa, 0x8e4ec6, 0x9a5cd0, 0xd19dff, 0xecd9fa],
    },
    Family {
        name: "violet", gray: false,
        light: [0xfdfcfe, 0xfaf8ff, 0xf4f0fe, 0xebe4ff, 0xe1d9ff, 0xd4cafe, 0xc2b5f5, 0xaa99ec, 0x6e56cf, 0x654dc4, 0x6550b9, 0x2f265f],
        dark:  [0x14121f, 0x1b1525, 0x291f43, 0x33255b, 0x3c2e69, 0x473876, 0x56468b, 0x6958ad, 0x6e56cf, 0x7d66d9, 0xbaa7ff, 0xe2ddfe],
    },
    Family {
        name: "iris", gray: false,
        light: [0xfdfdff, 0xf8f8ff, 0xf0f1fe, 0xe6e7ff, 0xdadcff, 0xcbcdff, 0xb8baf8, 0x9b9ef0, 0x5b5bd6, 0x5151cd, 0x5753c6, 0x272962],
        dark:  [0x13131e, 0x171625, 0x202248, 0x262a65, 0x303374, 0x3d3e82, 0x4a4a95, 0x5958b1, 0x5b5bd6, 0x6e6ade, 0xb1a9ff, 0xe0dffe],
    },
    Family {
        name: "indigo", gray: false,
        light: [0xfdfdfe, 0xf7f9ff, 0xedf2fe, 0xe1e9ff, 0xd2deff, 0xc1d0ff, 0xabbdf9, 0x8da4ef, 0x3e63dd, 0x3358d4, 0x3a5bc7, 0x1f2d5c],
        dark:  [0x11131f, 0x141726, 0x182449, 0x1d2e62, 0x253974, 0x304384, 0x3a4f97, 0x435db1, 0x3e63dd, 0x5472e4, 0x9eb1ff, 0xd6e1ff],
    },
    Family {
        name: "blue", gray: false,
        light: [0xfbfdff, 0xf4faff, 0xe6f4fe, 0xd5efff, 0xc2e5ff, 0xacd8fc, 0x8ec8f6, 0x5eb1ef, 0x0090ff, 0x0588f0, 0x0d74ce, 0x113264],
        dark:  [0x0d1520, 0x111927, 0x0d2847, 0x003362, 0x004074, 0x104d87, 0x205d9e, 0x2870bd, 0x0090ff, 0x3b9eff, 0x70b8ff, 0xc2e6ff],
    },
    Family {
        name: "cyan", gray: false,
        light: [0xfafdfe, 0xf2fafb, 0xdef7f9, 0xcaf1f6, 0xb5e9f0, 0x9ddde7, 0x7dcedc, 0x3db9cf, 0x00a2c7, 0x0797b9, 0x107d98, 0x0d3c48],
        dark:  [0x0b161a, 0x101b20, 0x082c36, 0x003848, 0x004558, 0x045468, 0x12677e, 0x11809c, 0x00a2c7, 0x23afd0, 0x4ccce6, 0xb6ecf7],
    },
    Family {
        name: "teal", gray: false,
        light: [0xfafefd, 0xf3fbf9, 0xe0f8f3, 0xccf3ea, 0xb8eae0, 0xa1ded2, 0x83cdc1, 0x53b9ab, 0x12a594, 0x0d9b8a, 0x008573, 0x0d3d38],
        dark:  [0x0d1514, 0x111c1b, 0x0d2d2a, 0x023b37, 0x084843, 0x145750, 0x1c6961, 0x207e73, 0x12a594, 0x0eb39e, 0x0bd8b6, 0xadf0dd],
    },
    Family {
        name: "jade", gray: false,
        light: [0xfbfefd, 0xf4fbf7, 0xe6f7ed, 0xd6f1e3, 0xc3e9d7, 0xacdec8, 0x8bceb6, 0x56ba9f, 0x29a383, 0x26997b, 0x208368, 0x1d3b31],
        dark:  [0x0d1512, 0x121c18, 0x0f2e22, 0x0b3b2c, 0x114837, 0x1b5745, 0x246854, 0x2a7e68, 0x29a383, 0x27b08b, 0x1fd8a4, 0xadf0d4],
    },
    Family {
        name: "green", gray: false,
        light: [0xfbfefc, 0xf4fbf6, 0xe6f6eb, 0xd6f1df, 0xc4e8d1, 0xadddc0, 0x8eceaa, 0x5bb98b, 0x30a46c, 0x2b9a66, 0x218358, 0x193b2d],
        dark:  [0x0e1512, 0x121b17, 0x132d21, 0x113b29, 0x174933, 0x20573e, 0x28684a, 0x2f7c57, 0x30a46c, 0x33b074, 0x3dd68c, 0xb1f1cb],
    },
    Family {
        name: "grass", gray: false,
        light: [0xfbfefb, 0xf5fbf5, 0xe9f6e9, 0xdaf1db, 0xc9e8ca, 0xb2ddb5, 0x94ce9a, 0x65ba74, 0x46a758, 0x3e9b4f, 0x2a7e3b, 0x203c25],
        dark:  [0x0e1511, 0x141a15, 0x1b2a1e, 0x1d3a24, 0x25482d, 0x2d5736, 0x366740, 0x3e7949, 0x46a758, 0x53b365, 0x71d083, 0xc2f0c2],
    },
    Family {
        name: "brown", gray: false,
        light: [0xfefdfc, 0xfcf9f6, 0xf6eee7, 0xf0e4d9, 0xebdaca, 0xe4cdb7, 0xdcbc9f, 0xcea37e, 0xad7f58, 0xa07553, 0x815e46, 0x3e332e],
        dark:  [0x12110f, 0x1c1816, 0x28211d, 0x322922, 0x3e3128, 0x4d3c2f, 0x614a39, 0x7c5f46, 0xad7f58, 0xb88c67, 0xdbb594, 0xf2e1ca],
    },
    Family {
        name: "bronze", gray: false,
        light: [0xfdfcfc, 0xfdf7f5, 0xf6edea, 0xefe4df, 0xe7d9d3, 0xdfcdc5, 0xd3bcb3, 0xc2a499, 0xa18072, 0x957468, 0x7d5e54, 0x43302b],
        dark:  [0x141110, 0x1c1917, 0x262220, 0x302a27, 0x3b3330, 0x493e3a, 0x5a4c47, 0x6f5f58, 0xa18072, 0xae8c7e, 0xd4b3a5, 0xede0d9],
    },
    Family {
        name: "gold", gray: false,
        light: [0xfdfdfc, 0xfaf9f2, 0xf2f0e7, 0xeae6db, 0xe1dccf, 0xd8d0bf, 0xcbc0aa, 0xb9a88d, 0x978365, 0x8c7a5e, 0x71624b, 0x3b352b],
        dark:  [0x121211, 0x1b1a17, 0x24231f, 0x2d2b26, 0x38352e, 0x444039, 0x544f46, 0x696256, 0x978365, 0xa39073, 0xcbb99f, 0xe8e2d9],
    },
    Family {
        name: "sky", gray: false,
        light: [0xf9feff, 0xf1fafd, 0xe1f6fd, 0xd1f0fa, 0xbee7f5, 0xa9daed, 0x8dcae3, 0x60b3d7, 0x7ce2fe, 0x74daf8, 0x00749e, 0x1d3e56],
        dark:  [0x0d141f, 0x111a27, 0x112840, 0x113555, 0x154467, 0x1b537b, 0x1f6692, 0x197cae, 0x7ce2fe, 0xa8eeff, 0x75c7f0, 0xc2f3ff],
    },
    Family {
        name: "mint", gray: false,
        light: [0xf9fefd, 0xf2fbf9, 0xddf9f2, 0xc8f4e9, 0xb3ecde, 0x9ce0d0, 0x7ecfbd, 0x4cbba5, 0x86ead4, 0x7de0cb, 0x027864, 0x16433c],
        dark:  [0x0e1515, 0x0f1b1b, 0x092c2b, 0x003a38, 0x004744, 0x105650, 0x1e685f, 0x277f70, 0x86ead4, 0xa8f5e5, 0x58d5ba, 0xc4f5e1],
    },
    Family {
        name: "lime", gray: false,
        light: [0xfcfdfa, 0xf8faf3, 0xeef6d6, 0xe2f0bd, 0xd3e7a6, 0xc2da91, 0xabc978, 0x8db654, 0xbdee63, 0xb0e64c, 0x5c7c2f, 0x37401c],
        dark:  [0x11130c, 0x151a10, 0x1f2917, 0x29371d, 0x334423, 0x3d522a, 0x496231, 0x577538, 0xbdee63, 0xd4ff70, 0xbde56c, 0xe3f7ba],
    },
    Family {
        name: "yellow", gray: false,
        light: [0xfdfdf9, 0xfefce9, 0xfffab8, 0xfff394, 0xffe770, 0xf3d768, 0xe4c767, 0xd5ae39, 0xffe629, 0xffdc00, 0x9e6c00, 0x473b1f],
        dark:  [0x14120b, 0x1b180f, 0x2d2305, 0x362b00, 0x433500, 0x524202, 0x665417, 0x836a21, 0xffe629, 0xffff57, 0xf5e147, 0xf6eeb4],
    },
    Family {
        name: "amber", gray: false,
        light: [0xfefdfb, 0xfefbe9, 0xfff7c2, 0xffee9c, 0xfbe577, 0xf3d673, 0xe9c162, 0xe2a336, 0xffc53d, 0xffba18, 0xab6400, 0x4f3422],
        dark:  [0x16120c, 0x1d180f, 0x302008, 0x3f2700, 0x4d3000, 0x5c3d05, 0x714f19, 0x8f6424, 0xffc53d, 0xffd60a, 0xffca16, 0xffe7b3],
    },
    Family {
        name: "orange", gray: false,
        light: [0xfefcfb, 0xfff7ed, 0xffefd6, 0xffdfb5, 0xffd19a, 0xffc182, 0xf5ae73, 0xec9455, 0xf76b15, 0xef5f00, 0xcc4e00, 0x582d1d],
        dark:  [0x17120e, 0x1e160f, 0x331e0b, 0x462100, 0x562800, 0x66350c, 0x7e451d, 0xa35829, 0xf76b15, 0xff801f, 0xffa057, 0xffe0c2],
    },
];
