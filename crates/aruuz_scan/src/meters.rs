//! Static meter and foot tables.
//!
//! Every meter row carries its Urdu display name, the weight template, and
//! the canonical rukn segmentation of that template. The catalogue
//! self-check verifies at load time that the segmentation concatenates back
//! to the template, so the three columns cannot drift apart.
//!
//! Several display names appear more than once: those are variant forms
//! (zihāf) sharing one bahr identity. Template strings may carry `+`
//! (caesura) and `~` (mandatory word boundary); both are retained as
//! separator tokens in the rukn rendering.

/// Foot (rukn) templates, longest first; ties resolve by table order.
pub(crate) const FEET: &[(&str, &str)] = &[
    ("متفاعلان", "--=-=-"),
    ("مفاعلتان", "-=--=-"),
    ("مفاعیلان", "-===-"),
    ("مستفعلان", "==-=-"),
    ("فاعلاتان", "=-==-"),
    ("فعلاتان", "--==-"),
    ("مفتعلان", "=--=-"),
    ("متفاعلن", "--=-="),
    ("مفاعلتن", "-=--="),
    ("مفاعیلن", "-==="),
    ("فاعلاتن", "=-=="),
    ("مستفعلن", "==-="),
    ("فعلاتن", "--=="),
    ("مفاعلن", "-=-="),
    ("مفتعلن", "=--="),
    ("مفعولان", "===-"),
    ("فاعلان", "=-=-"),
    ("فاعلات", "=-=-"),
    ("مفاعیل", "-==-"),
    ("فعولان", "-==-"),
    ("فعِلان", "--=-"),
    ("فعولن", "-=="),
    ("فاعلن", "=-="),
    ("مفعولن", "==="),
    ("مفعول", "==-"),
    ("فعلان", "==-"),
    ("فعول", "-=-"),
    ("فعِلن", "--="),
    ("فعلن", "=="),
    ("فعل", "-="),
    ("فع", "="),
    ("فَع", "-"),
];

/// The meter catalogue: (display name, template, rukn rendering).
pub(crate) const METERS: &[(&str, &str, &str)] = &[
    (
        "بحر ہزج مثمن سالم",
        "-===-===-===-===",
        "مفاعیلن مفاعیلن مفاعیلن مفاعیلن",
    ),
    ("بحر ہزج مسدس سالم", "-===-===-===", "مفاعیلن مفاعیلن مفاعیلن"),
    ("بحر ہزج مسدس محذوف", "-===-===-==", "مفاعیلن مفاعیلن فعولن"),
    (
        "بحر ہزج مثمن اخرب",
        "==--=====--===",
        "مفعول مفاعیلن مفعول مفاعیلن",
    ),
    (
        "بحر ہزج مثمن اخرب مکفوف محذوف",
        "==--==--==--==",
        "مفعول مفاعیل مفاعیل فعولن",
    ),
    (
        "بحر رمل مثمن سالم",
        "=-===-===-===-==",
        "فاعلاتن فاعلاتن فاعلاتن فاعلاتن",
    ),
    (
        "بحر رمل مثمن محذوف",
        "=-===-===-===-=",
        "فاعلاتن فاعلاتن فاعلاتن فاعلن",
    ),
    (
        "بحر رمل مثمن مخبون محذوف",
        "=-==--==--==--=",
        "فاعلاتن فعلاتن فعلاتن فعِلن",
    ),
    ("بحر رمل مسدس سالم", "=-===-===-==", "فاعلاتن فاعلاتن فاعلاتن"),
    ("بحر رمل مسدس محذوف", "=-===-===-=", "فاعلاتن فاعلاتن فاعلن"),
    (
        "بحر رمل مسدس مخبون محذوف",
        "=-==--==--=",
        "فاعلاتن فعلاتن فعِلن",
    ),
    ("بحر متقارب مثمن سالم", "-==-==-==-==", "فعولن فعولن فعولن فعولن"),
    ("بحر متقارب مثمن محذوف", "-==-==-==-=", "فعولن فعولن فعولن فعل"),
    (
        "بحر متقارب مثمن اثلم",
        "==~-==+==~-==",
        "فعلن ~ فعولن + فعلن ~ فعولن",
    ),
    ("بحر متدارک مثمن سالم", "=-==-==-==-=", "فاعلن فاعلن فاعلن فاعلن"),
    ("بحر متدارک مثمن مخبون", "--=--=--=--=", "فعِلن فعِلن فعِلن فعِلن"),
    (
        "بحر مضارع مثمن اخرب",
        "==-=-====-=-==",
        "مفعول فاعلاتن مفعول فاعلاتن",
    ),
    (
        "بحر مضارع مثمن اخرب مکفوف محذوف",
        "==-=-=--==-=-=",
        "مفعول فاعلات مفاعیل فاعلن",
    ),
    (
        "بحر مجتث مثمن مخبون",
        "-=-=--==-=-=--==",
        "مفاعلن فعلاتن مفاعلن فعلاتن",
    ),
    (
        "بحر مجتث مثمن مخبون محذوف",
        "-=-=--==-=-=--=",
        "مفاعلن فعلاتن مفاعلن فعِلن",
    ),
    (
        "بحر خفیف مسدس مخبون محذوف",
        "=-==-=-=--=",
        "فاعلاتن مفاعلن فعِلن",
    ),
    (
        "بحر رجز مثمن سالم",
        "==-===-===-===-=",
        "مستفعلن مستفعلن مستفعلن مستفعلن",
    ),
    (
        "بحر رجز مثمن مطوی",
        "=--==--==--==--=",
        "مفتعلن مفتعلن مفتعلن مفتعلن",
    ),
    (
        "بحر کامل مثمن سالم",
        "--=-=--=-=--=-=--=-=",
        "متفاعلن متفاعلن متفاعلن متفاعلن",
    ),
    (
        "بحر وافر مثمن سالم",
        "-=--=-=--=-=--=-=--=",
        "مفاعلتن مفاعلتن مفاعلتن مفاعلتن",
    ),
    (
        "بحر منسرح مثمن مطوی مکسوف",
        "=--==-==--==-=",
        "مفتعلن فاعلن مفتعلن فاعلن",
    ),
    ("بحر سریع مسدس مطوی مکسوف", "=--==--==-=", "مفتعلن مفتعلن فاعلن"),
    ("بحر قریب مسدس اخرب مکفوف", "==--==-=-==", "مفعول مفاعیل فاعلاتن"),
    ("بحر جدید مسدس مخبون", "--==--==-=-=", "فعلاتن فعلاتن مفاعلن"),
    ("بحر مشاکل مسدس مکفوف", "=-=--==--==-", "فاعلات مفاعیل مفاعیل"),
    ("بحر طویل مثمن سالم", "-==-===-==-===", "فعولن مفاعیلن فعولن مفاعیلن"),
    ("بحر مدید مثمن سالم", "=-===-==-===-=", "فاعلاتن فاعلن فاعلاتن فاعلن"),
    ("بحر بسیط مثمن سالم", "==-==-===-==-=", "مستفعلن فاعلن مستفعلن فاعلن"),
    ("بحر مخلع بسیط", "==-=-====-=-==", "مستفعلن فعولن مستفعلن فعولن"),
    (
        "بحر متقارب مثمن ہندی",
        "==============",
        "فعلن فعلن فعلن فعلن فعلن فعلن فعلن",
    ),
    (
        "بحر متقارب مثمن ہندی",
        "===============",
        "فعلن فعلن فعلن فعلن فعلن فعلن فعلن فع",
    ),
    (
        "بحر متدارک مثمن زمزمہ",
        "================",
        "فعلن فعلن فعلن فعلن فعلن فعلن فعلن فعلن",
    ),
];

/// Names of the meters matched by mora count rather than symbol position.
/// Their feet admit alternative short/long realizations per foot slot, so
/// the stored all-long template is only the canonical face.
pub(crate) const SPECIAL_METERS: &[&str] = &["بحر متقارب مثمن ہندی", "بحر متدارک مثمن زمزمہ"];
