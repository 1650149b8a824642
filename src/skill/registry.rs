//! Per-character multiplier registry
//!
//! Each supported character maps to the fixed set of (skill, field)
//! lookups that matter for their notable damage instances, together with
//! the combination rule for the parsed value. Adding a character is a
//! registry addition, not a code change.

use super::parse::{parse_multiplier, Multiplier};
use super::table::SkillTable;
use super::ResolveError;
use crate::types::{CharacterSnapshot, TalentSlot};
use std::collections::HashMap;

/// Which table field a spec reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldRef {
    Named(String),
    /// Field choice gated on unlocked constellation tiers
    ByConstellation {
        threshold: u8,
        at_least: String,
        below: String,
    },
}

impl FieldRef {
    fn select(&self, constellations: u8) -> &str {
        match self {
            FieldRef::Named(name) => name,
            FieldRef::ByConstellation {
                threshold,
                at_least,
                below,
            } => {
                if constellations >= *threshold {
                    at_least
                } else {
                    below
                }
            }
        }
    }
}

/// How a parsed value turns into the final multiplier
#[derive(Debug, Clone, PartialEq)]
pub enum Combine {
    /// Scalar value used as-is
    Single,
    /// Scalar value times a fixed factor (e.g. per-energy bonus x 90)
    Scaled(f64),
    /// Both parts of a split value
    Pair,
    /// First part of a split value, times a fixed factor
    First(f64),
    /// Second part of a split value, times a fixed factor
    Second(f64),
    /// Pair assembled from this field and a second field of the same skill
    WithField(String),
}

/// One notable multiplier for a character
#[derive(Debug, Clone, PartialEq)]
pub struct MultiplierSpec {
    /// Human-readable label; becomes the key in the damage report
    pub label: String,
    pub skill: String,
    pub field: FieldRef,
    pub slot: TalentSlot,
    pub combine: Combine,
}

impl MultiplierSpec {
    pub fn new(
        label: impl Into<String>,
        skill: impl Into<String>,
        field: impl Into<String>,
        slot: TalentSlot,
        combine: Combine,
    ) -> Self {
        MultiplierSpec {
            label: label.into(),
            skill: skill.into(),
            field: FieldRef::Named(field.into()),
            slot,
            combine,
        }
    }
}

/// Multipliers resolved for one character. Entries keep registry order;
/// per-field failures land in `omitted` instead of aborting the rest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedMultipliers {
    pub entries: Vec<(String, Multiplier)>,
    pub omitted: Vec<(String, ResolveError)>,
}

impl ResolvedMultipliers {
    pub fn get(&self, label: &str) -> Option<Multiplier> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, m)| *m)
    }
}

/// Registry of supported characters and their multiplier specs
#[derive(Debug, Clone, Default)]
pub struct MultiplierRegistry {
    specs: HashMap<String, Vec<MultiplierSpec>>,
}

impl MultiplierRegistry {
    pub fn new() -> Self {
        MultiplierRegistry::default()
    }

    pub fn supports(&self, character: &str) -> bool {
        self.specs.contains_key(character)
    }

    pub fn register(&mut self, character: impl Into<String>, specs: Vec<MultiplierSpec>) {
        self.specs.insert(character.into(), specs);
    }

    /// Resolve every registered multiplier for the snapshot's character.
    ///
    /// An unregistered character is an error (callers surface "no
    /// structured breakdown available" rather than substituting zero).
    /// Individual field failures only omit that entry.
    pub fn resolve(
        &self,
        table: &SkillTable,
        snapshot: &CharacterSnapshot,
    ) -> Result<ResolvedMultipliers, ResolveError> {
        let specs = self
            .specs
            .get(snapshot.name.as_str())
            .ok_or_else(|| ResolveError::UnsupportedCharacter(snapshot.name.clone()))?;
        if !table.contains(&snapshot.name) {
            return Err(ResolveError::MissingCharacterData(snapshot.name.clone()));
        }

        let mut resolved = ResolvedMultipliers::default();
        for spec in specs {
            match resolve_spec(table, snapshot, spec) {
                Ok(value) => resolved.entries.push((spec.label.clone(), value)),
                Err(err) => resolved.omitted.push((spec.label.clone(), err)),
            }
        }
        Ok(resolved)
    }

    /// The hand-maintained registry for the characters the engine models
    pub fn builtin() -> Self {
        use Combine::*;
        use TalentSlot::*;

        let mut registry = MultiplierRegistry::new();
        let spec = MultiplierSpec::new;

        registry.register(
            "钟离",
            vec![
                spec(
                    "玉璋护盾",
                    "元素战技·地心",
                    "护盾附加吸收量",
                    Skill,
                    WithField("护盾基础吸收量".into()),
                ),
                spec("原岩共鸣", "元素战技·地心", "岩脊伤害/共鸣伤害", Skill, Second(1.0)),
                spec("天星", "元素爆发·天星", "技能伤害", Burst, Single),
                spec("踢枪", "普通攻击·岩雨", "五段伤害", Attack, Single),
            ],
        );

        registry.register(
            "胡桃",
            vec![
                spec("攻击力提高", "蝶引来生", "攻击力提高", Skill, Single),
                spec("重击", "普通攻击·往生秘传枪法", "重击伤害", Attack, Single),
                spec("雪梅香", "蝶引来生", "血梅香伤害", Skill, Single),
                spec("大招", "安神秘法", "低血量时技能伤害", Burst, Single),
            ],
        );

        registry.register(
            "雷电将军",
            vec![
                spec("协同攻击", "神变·恶曜开眼", "协同攻击伤害", Skill, Single),
                // per point of burst energy, assumed 90
                spec("e增伤", "神变·恶曜开眼", "元素爆发伤害提高", Skill, Scaled(90.0)),
                spec("梦想一刀基础", "奥义·梦想真说", "梦想一刀基础伤害", Burst, Single),
                // per resolve stack, assumed fully stacked at 60
                spec("梦想一刀愿力", "奥义·梦想真说", "愿力加成", Burst, First(60.0)),
                spec("梦想一心重击基础", "奥义·梦想真说", "重击伤害", Burst, Pair),
                spec("梦想一心愿力", "奥义·梦想真说", "愿力加成", Burst, Second(60.0)),
                spec("梦想一心能量", "奥义·梦想真说", "梦想一心能量恢复", Burst, Single),
            ],
        );

        registry.register(
            "魈",
            vec![
                spec(
                    "AX:低空下落首戳",
                    "普通攻击·卷积微尘",
                    "低空/高空坠地冲击伤害",
                    Attack,
                    First(1.0),
                ),
                spec(
                    "AX:高空下落首戳",
                    "普通攻击·卷积微尘",
                    "低空/高空坠地冲击伤害",
                    Attack,
                    Second(1.0),
                ),
                spec("E:风轮两立", "风轮两立", "技能伤害", Skill, Single),
                spec(
                    "B:靖妖傩舞",
                    "靖妖傩舞",
                    "普通攻击/重击/下落攻击伤害提升",
                    Burst,
                    Single,
                ),
            ],
        );

        registry.register(
            "香菱",
            vec![
                spec("锅巴喷火", "锅巴出击", "喷火伤害", Skill, Single),
                spec("旋火轮", "旋火轮", "旋火轮伤害", Burst, Single),
            ],
        );

        registry.register(
            "申鹤",
            vec![
                spec("冰翎", "仰灵威召将役咒", "伤害值提升", Skill, Single),
                spec("大招减抗", "神女遣灵真诀", "抗性降低", Burst, Single),
                spec("e长按", "仰灵威召将役咒", "长按技能伤害", Skill, Single),
                spec("大招持续", "神女遣灵真诀", "持续伤害", Burst, Single),
            ],
        );

        registry.register(
            "刻晴",
            vec![
                spec("AZ:重击", "普通攻击·云来剑法", "重击伤害", Attack, Pair),
                spec("E:战技斩击", "星斗归位", "斩击伤害", Skill, Single),
                spec("Q:大招尾刀", "天街巡游", "最后一击伤害", Burst, Single),
            ],
        );

        // Klee's bomb/mine entries read the burst talent level, matching
        // the reference tables this engine is checked against.
        registry.register(
            "可莉",
            vec![
                spec("重击", "普通攻击·砰砰", "重击伤害", Attack, Single),
                spec("蹦蹦炸弹", "蹦蹦炸弹", "蹦蹦炸弹伤害", Burst, Single),
                spec("轰轰火花", "轰轰火花", "轰轰火花伤害", Burst, Single),
            ],
        );

        registry.register(
            "八重神子",
            vec![
                spec("重击", "普通攻击·狐灵食罪式", "重击伤害", Attack, Single),
                MultiplierSpec {
                    label: "杀生樱".into(),
                    skill: "野干役咒·杀生樱".into(),
                    field: FieldRef::ByConstellation {
                        threshold: 2,
                        at_least: "杀生樱伤害·肆阶".into(),
                        below: "杀生樱伤害·叁阶".into(),
                    },
                    slot: Skill,
                    combine: Single,
                },
                spec("天狐霆雷", "大密法·天狐显真", "天狐霆雷伤害", Burst, Single),
            ],
        );

        registry.register(
            "阿贝多",
            vec![
                spec("阳华绽放", "创生法·拟造阳华", "刹那之花伤害", Skill, Single),
                spec("大招首段", "诞生式·大地之潮", "爆发伤害", Burst, Single),
            ],
        );

        registry.register(
            "神里绫华",
            vec![
                spec("重击", "普通攻击·神里流·倾", "重击伤害", Attack, Single),
                spec("冰华伤害", "神里流·冰华", "技能伤害", Skill, Single),
                spec("霜灭每段", "神里流·霜灭", "切割伤害", Burst, Single),
            ],
        );

        // Xingqiu's sword-rain entry reads the skill talent level,
        // matching the reference tables.
        registry.register(
            "行秋",
            vec![
                spec("画雨笼山", "古华剑·画雨笼山", "技能伤害", Skill, Pair),
                spec("裁雨留虹每段", "古华剑·裁雨留虹", "剑雨伤害", Skill, Single),
            ],
        );

        registry.register(
            "夜兰",
            vec![
                spec("破局矢", "普通攻击·潜形隐曜弓", "破局矢伤害", Attack, Single),
                spec("元素战技", "萦络纵命索", "技能伤害", Skill, Single),
                spec("大招每段", "渊图玲珑骰", "玄掷玲珑伤害", Burst, Single),
            ],
        );

        registry.register(
            "甘雨",
            vec![
                spec(
                    "霜华矢",
                    "普通攻击·流天射术",
                    "霜华矢命中伤害",
                    Attack,
                    WithField("霜华矢·霜华绽发伤害".into()),
                ),
                spec("元素战技", "山泽麟迹", "技能伤害", Skill, Single),
                spec("冰棱伤害", "降众天华", "冰棱伤害", Burst, Single),
            ],
        );

        registry
    }
}

fn resolve_spec(
    table: &SkillTable,
    snapshot: &CharacterSnapshot,
    spec: &MultiplierSpec,
) -> Result<Multiplier, ResolveError> {
    let index = snapshot.talents.level_index(spec.slot);
    let field = spec.field.select(snapshot.constellations);
    let raw = table.raw_value(&snapshot.name, &spec.skill, field, index)?;
    let parsed = parse_multiplier(raw)?;

    let shape_err = || ResolveError::UnexpectedShape {
        field: field.to_string(),
        raw: raw.to_string(),
    };

    match &spec.combine {
        Combine::Single => parsed.single().map(Multiplier::Single).ok_or_else(shape_err),
        Combine::Scaled(factor) => parsed
            .single()
            .map(|v| Multiplier::Single(v * factor))
            .ok_or_else(shape_err),
        Combine::Pair => parsed.pair().map(|(a, b)| Multiplier::Pair(a, b)).ok_or_else(shape_err),
        Combine::First(factor) => parsed
            .pair()
            .map(|(a, _)| Multiplier::Single(a * factor))
            .ok_or_else(shape_err),
        Combine::Second(factor) => parsed
            .pair()
            .map(|(_, b)| Multiplier::Single(b * factor))
            .ok_or_else(shape_err),
        Combine::WithField(second_field) => {
            let first = parsed.single().ok_or_else(shape_err)?;
            let raw2 = table.raw_value(&snapshot.name, &spec.skill, second_field, index)?;
            let second = parse_multiplier(raw2)?
                .single()
                .ok_or_else(|| ResolveError::UnexpectedShape {
                    field: second_field.clone(),
                    raw: raw2.to_string(),
                })?;
            Ok(Multiplier::Pair(first, second))
        }
    }
}
