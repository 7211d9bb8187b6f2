use crate::prelude::*;

/// The one identity that gets a personal dashboard.
pub const KANMU: &str = "kanmu";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DashboardRecipe {
    pub id: Id,
    pub name: &'static str,
    pub description: &'static str,
    pub emoji: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Dashboard {
    pub title: &'static str,
    pub welcome_message: String,
    pub recipes: Vec<DashboardRecipe>,
}

const KANMU_RECIPES: &[DashboardRecipe] = &[
    DashboardRecipe {
        id: 2,
        name: "ぎょうざ",
        description: "パリッとした食感が楽しめる手作りぎょうざ",
        emoji: "🥟",
    },
    DashboardRecipe {
        id: 3,
        name: "いくらとポテト",
        description: "プチプチのいくらとホクホクポテトの贅沢な一品",
        emoji: "🥔",
    },
    DashboardRecipe {
        id: 5,
        name: "ピザ",
        description: "手作り生地で作る本格的なマルゲリータピザ",
        emoji: "🍕",
    },
];

const SHARED_RECIPES: &[DashboardRecipe] = &[DashboardRecipe {
    id: REWARD_RECIPE,
    name: "ステーキソース",
    description: "お肉を引き立てる特製ソース。隠し味で絶品に！",
    emoji: "🥩",
}];

impl Dashboard {
    /// Picks the dashboard by comparing the identity against [`KANMU`],
    /// nothing else about the identity matters.
    pub fn for_identity(identity: &str) -> Self {
        if identity == KANMU {
            Self {
                title: "kanmuのダッシュボード",
                welcome_message: format!(
                    "🎉 こんにちは、{identity}さん！あなたの美味しいレシピコレクションをお楽しみください。"
                ),
                recipes: KANMU_RECIPES.to_vec(),
            }
        } else {
            Self {
                title: "レシピダッシュボード",
                welcome_message: format!(
                    "✨ こんにちは、{identity}さん！利用可能なレシピをご覧ください。"
                ),
                recipes: SHARED_RECIPES.to_vec(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(dashboard: &Dashboard) -> Vec<Id> {
        dashboard.recipes.iter().map(|recipe| recipe.id).collect()
    }

    #[test]
    fn test_kanmu_dashboard() {
        let dashboard = Dashboard::for_identity("kanmu");
        assert_eq!(dashboard.title, "kanmuのダッシュボード");
        assert!(dashboard.welcome_message.contains("kanmuさん"));
        assert_eq!(ids(&dashboard), [2, 3, 5]);
    }

    #[test]
    fn test_other_identities() {
        for identity in ["admin", "zip", "", "Kanmu", "kanmu "] {
            let dashboard = Dashboard::for_identity(identity);
            assert_eq!(dashboard.title, "レシピダッシュボード", "identity {identity:?}");
            assert_eq!(ids(&dashboard), [REWARD_RECIPE]);
            assert!(dashboard.welcome_message.contains(&format!("{identity}さん")));
        }
    }
}
