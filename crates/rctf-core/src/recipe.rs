use crate::prelude::*;

pub type Id = i64;

/// The only recipe whose page links to the reward download.
pub const REWARD_RECIPE: Id = 13;
/// The only file name `/download/` will serve.
pub const REWARD_FILENAME: &str = "flag.zip";

/// Compiled-in text of a recipe, referencing its image by file name.
#[derive(Debug, Clone, Copy)]
pub struct RecipeEntry {
    pub id: Id,
    pub name: &'static str,
    pub description: &'static str,
    pub emoji: &'static str,
    pub image: &'static str,
    pub content_type: &'static str,
    pub steps: &'static [&'static str],
}

pub const RECIPES: &[RecipeEntry] = &[
    RecipeEntry {
        id: 2,
        name: "ぎょうざ",
        description: "パリッとした食感が楽しめる手作りぎょうざ。キャベツとニラの旨みが詰まった定番の中華料理です。",
        emoji: "🥟",
        image: "gyoza.jpg",
        content_type: "image/jpeg",
        steps: &[
            "豚ひき肉300gに醤油、酒、ごま油を加えて混ぜる",
            "白菜とニラをみじん切りにして塩もみし、水気を絞る",
            "肉と野菜を混ぜ合わせて餡を作る",
            "ぎょうざの皮に餡を包む",
            "フライパンに油を熱し、ぎょうざを並べる",
            "底面に焼き色がついたら水を加えて蓋をし、蒸し焼きにする",
        ],
    },
    RecipeEntry {
        id: 3,
        name: "いくらとポテト",
        description: "プチプチのいくらとホクホクポテトの贅沢な組み合わせ。見た目も美しく、特別な日にぴったりの一品です。",
        emoji: "🥔",
        image: "ikura_to_potato.jpg",
        content_type: "image/jpeg",
        steps: &[
            "じゃがいも4個を皮付きのまま茹でる",
            "竹串がスッと通るまで20-25分茹でる",
            "茹で上がったらすぐに冷水で冷やし、皮をむく",
            "適当な大きさに切って器に盛る",
            "いくら50gを上に乗せる",
            "お好みでバターと塩コショウで味付けする",
        ],
    },
    RecipeEntry {
        id: 4,
        name: "さしみ料理",
        description: "新鮮な魚の旨みを存分に味わえる日本料理の代表格。包丁使いと盛り付けが美しさの決め手です。",
        emoji: "🍣",
        image: "sashimi.jpg",
        content_type: "image/jpeg",
        steps: &[
            "新鮮な刺身用の魚を用意する",
            "包丁を研いで切れ味を良くする",
            "魚を適当な厚さに切る",
            "わさびと醤油を添える",
            "大根のつまと一緒に盛り付ける",
            "美しく器に盛って完成",
        ],
    },
    RecipeEntry {
        id: 5,
        name: "ピザ",
        description: "手作り生地で作る本格的なマルゲリータピザ。トマトソースとモッツァレラチーズのシンプルな美味しさ。",
        emoji: "🍕",
        image: "pizza.jpg",
        content_type: "image/jpeg",
        steps: &[
            "強力粉200g、薄力粉50g、塩小さじ1を混ぜる",
            "ぬるま湯140mlにドライイースト3gを溶かす",
            "粉類にイースト水を加えてこね、15分発酵させる",
            "生地を薄く伸ばしてピザソースを塗る",
            "チーズとお好みの具材をのせる",
            "220度のオーブンで12-15分焼く",
        ],
    },
    RecipeEntry {
        id: REWARD_RECIPE,
        name: "ステーキソース",
        description: "お肉を引き立てる特製ソース。玉ねぎ、りんご、にんにくの絶妙なバランスで、ステーキが格段に美味しくなります！",
        emoji: "🥩",
        image: "steak_sauce.jpg",
        content_type: "image/jpeg",
        steps: &[
            "玉ねぎを炒める",
            "りんごを加える",
            "にんにくを加える",
            "醤油を加える",
            "みりんを加えて煮詰める",
            "全てが混ざり合い、とろみがついたら完成",
        ],
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub emoji: String,
    pub image: Vec<u8>,
    pub content_type: String,
    pub steps: Vec<String>,
}

/// What the recipe page template gets to see.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RecipeDetail {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub emoji: String,
    pub steps: Vec<String>,
    pub show_download: bool,
}

/// All recipes, keyed by id.
///
/// Lookups do not take the caller into account: every recipe is visible
/// to every identity.
#[derive(Debug, Clone, Default)]
pub struct RecipeBook {
    recipes: BTreeMap<Id, Recipe>,
}

impl RecipeBook {
    /// Builds the book from [`RECIPES`], calling `read_image` once for
    /// every image file name.
    pub fn load<E>(mut read_image: impl FnMut(&str) -> Result<Vec<u8>, E>) -> Result<Self, E> {
        let mut recipes = BTreeMap::new();
        for entry in RECIPES {
            let image = read_image(entry.image)?;
            recipes.insert(
                entry.id,
                Recipe {
                    id: entry.id,
                    name: entry.name.to_owned(),
                    description: entry.description.to_owned(),
                    emoji: entry.emoji.to_owned(),
                    image,
                    content_type: entry.content_type.to_owned(),
                    steps: entry.steps.iter().map(|&step| step.to_owned()).collect(),
                },
            );
        }
        Ok(Self { recipes })
    }

    pub fn get(&self, id: Id) -> Option<&Recipe> {
        self.recipes.get(&id)
    }

    pub fn detail(&self, id: Id) -> Option<RecipeDetail> {
        let recipe = self.get(id)?;
        Some(RecipeDetail {
            id: recipe.id,
            name: recipe.name.clone(),
            description: recipe.description.clone(),
            emoji: recipe.emoji.clone(),
            steps: recipe.steps.clone(),
            show_download: id == REWARD_RECIPE,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.values()
    }
}
