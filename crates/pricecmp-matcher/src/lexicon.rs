//! Static word lists driving product-type normalization.
//!
//! Every list is applied in order and removal is plain substring removal, so
//! entries that overlap (`"simply"` / `"simply nature"`) interact: the earlier
//! entry wins. Keep the order stable when editing.

/// Brand names and marketing adjectives removed from product names.
pub(crate) const BRANDS: &[&str] = &[
    "groupr",
    "nathan's",
    "jimmy dean",
    "carolina",
    "rao's",
    "butterball",
    "kellogg's",
    "hellmann's",
    "goya",
    "bubba",
    "wonder",
    "libby's",
    "badia",
    "cheerios",
    "velveeta",
    "oreo",
    "simply",
    "martin's",
    "cinnamon toast crunch",
    "bell & evans",
    "blue diamond",
    "mott's",
    "chips ahoy",
    "lactaid",
    "froot loops",
    "stonyfield",
    "sara lee",
    "mission",
    "entenmann's",
    "boar's head",
    "specially selected",
    "kirkwood",
    "happy farms",
    "nature's nectar",
    "benton's",
    "clancy's",
    "simply nature",
    "l'oven fresh",
    "park street deli",
    "reggano",
    "fresh",
    "organic",
    "premium",
    "classic",
    "original",
    "natural",
    "pure",
    "real",
    "homemade",
    "famous",
    "best",
    "perdue",
    "tyson",
    "foster farms",
    "oscar mayer",
    "hillshire farm",
    "kraft",
    "philadelphia",
    "tropicana",
    "minute maid",
    "coca-cola",
    "pepsi",
    "poland spring",
    "dasani",
    "aquafina",
    "smart water",
    "tide",
    "gain",
    "downy",
    "charmin",
    "bounty",
    "dawn",
    "lysol",
    "clorox",
    "arm & hammer",
    "colgate",
    "crest",
    "listerine",
    "pantene",
    "head & shoulders",
    "dove",
    "olay",
    "nivea",
    "general mills",
    "post",
    "quaker",
    "kashi",
    "nature valley",
    "planters",
    "lay's",
    "doritos",
    "cheetos",
    "pringles",
    "nabisco",
    "pepperidge farm",
    "keebler",
    "sunshine",
    "ritz",
    "wheat thins",
    "triscuit",
    "goldfish",
    "campbell's",
    "progresso",
    "hunt's",
    "del monte",
    "dole",
    "chiquita",
];

/// Texture, size, and dietary words that do not distinguish one product type
/// from another.
pub(crate) const DESCRIPTORS: &[&str] = &[
    "sliced",
    "diced",
    "chopped",
    "whole",
    "half",
    "quarter",
    "thin",
    "thick",
    "large",
    "small",
    "medium",
    "jumbo",
    "mini",
    "frozen",
    "fresh",
    "canned",
    "jarred",
    "bottled",
    "packed",
    "boneless",
    "skinless",
    "bone-in",
    "skin-on",
    "seedless",
    "unsalted",
    "salted",
    "low fat",
    "fat free",
    "sugar free",
    "gluten free",
    "organic",
    "natural",
    "free range",
    "cage free",
    "antibiotic free",
    "hormone free",
    "grass fed",
    "wild caught",
    "farm raised",
    "center cut",
    "family pack",
    "value pack",
    "super pack",
    "mega roll",
    "double roll",
    "ultra",
    "extra",
    "premium",
    "select",
    "choice",
    "prime",
    "grade a",
    "usda",
    "certified",
    "all natural",
    "no added",
    "reduced",
    "light",
    "diet",
    "zero",
    "caffeine free",
    "decaf",
    "regular",
];

/// Wording variants and the standard product type they stand for.
///
/// The first variant found anywhere in a name replaces the whole name.
pub(crate) const PRODUCT_MAPPINGS: &[(&str, &str)] = &[
    // meat
    ("beef franks", "hot dogs"),
    ("skinless beef franks", "hot dogs"),
    ("bun length franks", "hot dogs"),
    ("beef hot dogs", "hot dogs"),
    ("wieners", "hot dogs"),
    ("frankfurters", "hot dogs"),
    // bread
    ("hamburger buns", "burger buns"),
    ("sandwich buns", "burger buns"),
    ("hot dog rolls", "hot dog buns"),
    ("buns", "burger buns"),
    // eggs
    ("large eggs", "eggs"),
    ("white eggs", "eggs"),
    ("brown eggs", "eggs"),
    // bacon
    ("applewood smoked bacon", "bacon"),
    ("hickory smoked bacon", "bacon"),
    ("thick cut bacon", "bacon"),
    // ground meat
    ("ground turkey", "turkey ground"),
    ("ground beef", "beef ground"),
    ("ground chicken", "chicken ground"),
    // rice
    ("jasmine rice", "rice"),
    ("long grain rice", "rice"),
    ("white rice", "rice"),
    ("brown rice", "rice"),
    // pasta sauce
    ("marinara sauce", "pasta sauce"),
    ("tomato sauce", "pasta sauce"),
    ("spaghetti sauce", "pasta sauce"),
    // cereal
    ("frosted flakes", "cereal"),
    ("corn flakes", "cereal"),
    ("cinnamon toast crunch", "cereal"),
    ("cheerios", "cereal"),
    ("froot loops", "cereal"),
    // cheese
    ("american cheese", "cheese"),
    ("cheddar cheese", "cheese"),
    ("swiss cheese", "cheese"),
    ("provolone cheese", "cheese"),
    ("mozzarella cheese", "cheese"),
    // milk
    ("whole milk", "milk"),
    ("skim milk", "milk"),
    ("2% milk", "milk"),
    ("1% milk", "milk"),
    ("almond milk", "almond milk"),
    // juice
    ("orange juice", "orange juice"),
    ("apple juice", "apple juice"),
    ("grape juice", "grape juice"),
    ("cranberry juice", "cranberry juice"),
    // water
    ("purified water", "water"),
    ("spring water", "water"),
    ("drinking water", "water"),
    ("bottled water", "water"),
];
