//! Static table of pride flags.
//!
//! Every flag is described as a list of weighted horizontal stripes and
//! rendered onto the pipeline's square canvas on demand, so lookups are
//! deterministic and need no bundled assets. Matching is case-insensitive
//! over both canonical names and aliases.

use image::{Rgba, RgbaImage};

use crate::{handle::ImageHandle, pipeline::CANVAS_SIZE};

#[derive(Debug, Clone, Copy)]
struct Stripe {
    color: [u8; 3],
    weight: u32,
}

const fn stripe(color: [u8; 3]) -> Stripe {
    Stripe { color, weight: 1 }
}

const fn weighted(color: [u8; 3], weight: u32) -> Stripe {
    Stripe { color, weight }
}

#[derive(Debug)]
pub struct Flag {
    name: &'static str,
    aliases: &'static [&'static str],
    stripes: &'static [Stripe],
}

static FLAGS: &[Flag] = &[
    Flag {
        name: "lgbt",
        aliases: &["rainbow", "gay", "pride"],
        stripes: &[
            stripe([0xE4, 0x03, 0x03]),
            stripe([0xFF, 0x8C, 0x00]),
            stripe([0xFF, 0xED, 0x00]),
            stripe([0x00, 0x80, 0x26]),
            stripe([0x24, 0x40, 0x8E]),
            stripe([0x73, 0x29, 0x82]),
        ],
    },
    Flag {
        name: "trans",
        aliases: &["transgender"],
        stripes: &[
            stripe([0x5B, 0xCE, 0xFA]),
            stripe([0xF5, 0xA9, 0xB8]),
            stripe([0xFF, 0xFF, 0xFF]),
            stripe([0xF5, 0xA9, 0xB8]),
            stripe([0x5B, 0xCE, 0xFA]),
        ],
    },
    Flag {
        name: "bi",
        aliases: &["bisexual"],
        stripes: &[
            weighted([0xD6, 0x02, 0x70], 2),
            weighted([0x9B, 0x4F, 0x96], 1),
            weighted([0x00, 0x38, 0xA8], 2),
        ],
    },
    Flag {
        name: "pan",
        aliases: &["pansexual"],
        stripes: &[
            stripe([0xFF, 0x21, 0x8C]),
            stripe([0xFF, 0xD8, 0x00]),
            stripe([0x21, 0xB1, 0xFF]),
        ],
    },
    Flag {
        name: "nonbinary",
        aliases: &["nb", "enby"],
        stripes: &[
            stripe([0xFC, 0xF4, 0x34]),
            stripe([0xFF, 0xFF, 0xFF]),
            stripe([0x9C, 0x59, 0xD1]),
            stripe([0x2C, 0x2C, 0x2C]),
        ],
    },
    Flag {
        name: "ace",
        aliases: &["asexual"],
        stripes: &[
            stripe([0x00, 0x00, 0x00]),
            stripe([0xA3, 0xA3, 0xA3]),
            stripe([0xFF, 0xFF, 0xFF]),
            stripe([0x80, 0x00, 0x80]),
        ],
    },
    Flag {
        name: "aro",
        aliases: &["aromantic"],
        stripes: &[
            stripe([0x3D, 0xA5, 0x42]),
            stripe([0xA7, 0xD3, 0x79]),
            stripe([0xFF, 0xFF, 0xFF]),
            stripe([0xA9, 0xA9, 0xA9]),
            stripe([0x00, 0x00, 0x00]),
        ],
    },
    Flag {
        name: "lesbian",
        aliases: &[],
        stripes: &[
            stripe([0xD5, 0x2D, 0x00]),
            stripe([0xFF, 0x9A, 0x56]),
            stripe([0xFF, 0xFF, 0xFF]),
            stripe([0xD3, 0x62, 0xA4]),
            stripe([0xA3, 0x02, 0x62]),
        ],
    },
    Flag {
        name: "genderfluid",
        aliases: &["fluid"],
        stripes: &[
            stripe([0xFF, 0x76, 0xA4]),
            stripe([0xFF, 0xFF, 0xFF]),
            stripe([0xC0, 0x11, 0xD7]),
            stripe([0x00, 0x00, 0x00]),
            stripe([0x2F, 0x3C, 0xBE]),
        ],
    },
    Flag {
        name: "agender",
        aliases: &[],
        stripes: &[
            stripe([0x00, 0x00, 0x00]),
            stripe([0xB9, 0xB9, 0xB9]),
            stripe([0xFF, 0xFF, 0xFF]),
            stripe([0xB8, 0xF4, 0x83]),
            stripe([0xFF, 0xFF, 0xFF]),
            stripe([0xB9, 0xB9, 0xB9]),
            stripe([0x00, 0x00, 0x00]),
        ],
    },
    Flag {
        name: "genderqueer",
        aliases: &["gq"],
        stripes: &[
            stripe([0xB5, 0x7E, 0xDC]),
            stripe([0xFF, 0xFF, 0xFF]),
            stripe([0x4A, 0x81, 0x23]),
        ],
    },
    Flag {
        name: "polysexual",
        aliases: &["poly"],
        stripes: &[
            stripe([0xF7, 0x14, 0xBA]),
            stripe([0x01, 0xD6, 0x6A]),
            stripe([0x15, 0x94, 0xF6]),
        ],
    },
];

impl Flag {
    fn matches(&self, query: &str) -> bool {
        self.name.eq_ignore_ascii_case(query)
            || self
                .aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(query))
    }

    fn render(&self) -> RgbaImage {
        let total_weight: u32 = self.stripes.iter().map(|s| s.weight).sum();
        let mut canvas = RgbaImage::new(CANVAS_SIZE, CANVAS_SIZE);

        let mut row = 0;
        let mut cumulative_weight = 0;

        for Stripe { color, weight } in self.stripes {
            cumulative_weight += weight;
            let stripe_end = CANVAS_SIZE * cumulative_weight / total_weight;

            while row < stripe_end {
                for x in 0..CANVAS_SIZE {
                    canvas.put_pixel(x, row, Rgba([color[0], color[1], color[2], 255]));
                }
                row += 1;
            }
        }

        canvas
    }
}

fn lookup(name_or_alias: &str) -> Option<&'static Flag> {
    FLAGS.iter().find(|flag| flag.matches(name_or_alias))
}

/// Render the source canvas for a known flag name or alias.
pub fn resolve(name_or_alias: &str) -> Option<ImageHandle> {
    lookup(name_or_alias).map(|flag| ImageHandle::from(flag.render()))
}

/// The canonical name of a flag, for display purposes.
pub fn canonical_name(name_or_alias: &str) -> Option<&'static str> {
    lookup(name_or_alias).map(|flag| flag.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let lower = resolve("lgbt").unwrap().into_buffer();
        let mixed = resolve("Lgbt").unwrap().into_buffer();
        let upper = resolve("LGBT").unwrap().into_buffer();

        assert_eq!(lower, mixed);
        assert_eq!(lower, upper);
    }

    #[test]
    fn aliases_resolve_to_the_same_canvas() {
        let canonical = resolve("lgbt").unwrap().into_buffer();
        let alias = resolve("rainbow").unwrap().into_buffer();

        assert_eq!(canonical, alias);
        assert_eq!(canonical_name("rainbow"), Some("lgbt"));
        assert_eq!(canonical_name("TRANSGENDER"), Some("trans"));
    }

    #[test]
    fn unknown_names_are_not_found() {
        assert!(resolve("not-a-real-flag").is_none());
        assert_eq!(canonical_name("not-a-real-flag"), None);
    }

    #[test]
    fn resolve_is_deterministic() {
        let first = resolve("bi").unwrap().into_buffer();
        let second = resolve("bi").unwrap().into_buffer();
        assert_eq!(first, second);
    }

    #[test]
    fn stripes_cover_the_whole_canvas_in_order() {
        let trans = resolve("trans").unwrap().into_buffer();

        assert_eq!(trans.dimensions(), (CANVAS_SIZE, CANVAS_SIZE));
        assert_eq!(*trans.get_pixel(0, 0), Rgba([0x5B, 0xCE, 0xFA, 255]));
        assert_eq!(
            *trans.get_pixel(0, CANVAS_SIZE / 2),
            Rgba([0xFF, 0xFF, 0xFF, 255])
        );
        assert_eq!(
            *trans.get_pixel(0, CANVAS_SIZE - 1),
            Rgba([0x5B, 0xCE, 0xFA, 255])
        );
    }

    #[test]
    fn weighted_stripes_get_proportional_rows() {
        let bi = resolve("bi").unwrap().into_buffer();

        // 2:1:2 weights; the middle stripe occupies the center fifth.
        assert_eq!(*bi.get_pixel(0, 0), Rgba([0xD6, 0x02, 0x70, 255]));
        assert_eq!(
            *bi.get_pixel(0, CANVAS_SIZE / 2),
            Rgba([0x9B, 0x4F, 0x96, 255])
        );
        assert_eq!(
            *bi.get_pixel(0, CANVAS_SIZE - 1),
            Rgba([0x00, 0x38, 0xA8, 255])
        );
    }
}
