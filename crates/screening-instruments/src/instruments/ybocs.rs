use screening_core::models::instrument::InstrumentId;

use crate::scoring::{Item, ResponseOption, SeverityBand, Subscale};
use crate::Instrument;

/// Y-BOCS: Yale-Brown Obsessive Compulsive Scale.
/// 10 items, each rated 0–4 against item-specific anchors. Total 0–40,
/// split into obsessions (items 1–5) and compulsions (items 6–10).
pub struct Ybocs;

/// Five anchors valued 0 through 4.
const fn anchors(labels: [&'static str; 5]) -> [ResponseOption; 5] {
    [
        ResponseOption { label: labels[0], value: 0 },
        ResponseOption { label: labels[1], value: 1 },
        ResponseOption { label: labels[2], value: 2 },
        ResponseOption { label: labels[3], value: 3 },
        ResponseOption { label: labels[4], value: 4 },
    ]
}

static TIME_OBSESSIONS: [ResponseOption; 5] = anchors([
    "None",
    "Less than 1 hr/day or occasional occurrence",
    "1 to 3 hrs/day or frequent",
    "Greater than 3 and up to 8 hrs/day or very frequent occurrence",
    "Greater than 8 hrs/day or nearly constant occurrence",
]);

static INTERFERENCE: [ResponseOption; 5] = anchors([
    "None",
    "Slight interference with social or other activities, but overall performance not impaired",
    "Definite interference with social or occupational performance, but still manageable",
    "Causes substantial impairment in social or occupational performance",
    "Incapacitating",
]);

static DISTRESS_OBSESSIONS: [ResponseOption; 5] = anchors([
    "None",
    "Not too disturbing",
    "Disturbing, but still manageable",
    "Very disturbing",
    "Near constant and disabling distress",
]);

static RESIST_OBSESSIONS: [ResponseOption; 5] = anchors([
    "Try to resist all the time",
    "Try to resist most of the time",
    "Make some effort to resist",
    "Yield to all obsessions without attempting to control them, but with some reluctance",
    "Completely and willingly yield to all obsessions",
]);

static CONTROL_OBSESSIONS: [ResponseOption; 5] = anchors([
    "Complete control",
    "Usually able to stop or divert obsessions with some effort and concentration",
    "Sometimes able to stop or divert obsessions",
    "Rarely successful in stopping or dismissing obsessions, can only divert attention with difficulty",
    "Obsessions are completely involuntary, rarely able to even momentarily alter obsessive thinking",
]);

static TIME_COMPULSIONS: [ResponseOption; 5] = anchors([
    "None",
    "Less than 1 hr/day or occasional performance of compulsive behaviors",
    "From 1 to 3 hrs/day, or frequent performance of compulsive behaviors",
    "More than 3 and up to 8 hrs/day, or very frequent performance of compulsive behaviors",
    "More than 8 hrs/day, or near constant performance of compulsive behaviors",
]);

static DISTRESS_COMPULSIONS: [ResponseOption; 5] = anchors([
    "None",
    "Only slightly anxious if compulsions prevented",
    "Anxiety would mount but remain manageable if compulsions prevented",
    "Prominent and very disturbing increase in anxiety if compulsions interrupted",
    "Incapacitating anxiety from any intervention aimed at modifying activity",
]);

static RESIST_COMPULSIONS: [ResponseOption; 5] = anchors([
    "Always try to resist",
    "Try to resist most of the time",
    "Make some effort to resist",
    "Yield to almost all compulsions without attempting to control them, but with some reluctance",
    "Completely and willingly yield to all compulsions",
]);

static CONTROL_COMPULSIONS: [ResponseOption; 5] = anchors([
    "Complete control",
    "Pressure to perform the behavior but usually able to exercise voluntary control over it",
    "Strong pressure to perform behavior, can control it only with difficulty",
    "Very strong drive to perform behavior, must be carried to completion, can only delay with difficulty",
    "Drive to perform behavior experienced as completely involuntary and overpowering, rarely able to even momentarily delay activity",
]);

static ITEMS: [Item; 10] = [
    Item {
        position: 1,
        prompt: "How much of your time is occupied by obsessive thoughts?",
        symptom: "time occupied by obsessive thoughts",
        options: &TIME_OBSESSIONS,
    },
    Item {
        position: 2,
        prompt: "How much do your obsessive thoughts interfere with your work, school, social, or other important role functioning?",
        symptom: "interference from obsessive thoughts",
        options: &INTERFERENCE,
    },
    Item {
        position: 3,
        prompt: "How much distress do your obsessive thoughts cause you?",
        symptom: "distress from obsessive thoughts",
        options: &DISTRESS_OBSESSIONS,
    },
    Item {
        position: 4,
        prompt: "How much of an effort do you make to resist the obsessive thoughts?",
        symptom: "difficulty resisting obsessive thoughts",
        options: &RESIST_OBSESSIONS,
    },
    Item {
        position: 5,
        prompt: "How much control do you have over your obsessive thoughts?",
        symptom: "lack of control over obsessive thoughts",
        options: &CONTROL_OBSESSIONS,
    },
    Item {
        position: 6,
        prompt: "How much time do you spend performing compulsive behaviors?",
        symptom: "time spent on compulsive behaviors",
        options: &TIME_COMPULSIONS,
    },
    Item {
        position: 7,
        prompt: "How much do your compulsive behaviors interfere with your work, school, social, or other important role functioning?",
        symptom: "interference from compulsive behaviors",
        options: &INTERFERENCE,
    },
    Item {
        position: 8,
        prompt: "How would you feel if prevented from performing your compulsion(s)? How anxious would you become?",
        symptom: "distress when prevented from compulsions",
        options: &DISTRESS_COMPULSIONS,
    },
    Item {
        position: 9,
        prompt: "How much of an effort do you make to resist the compulsions?",
        symptom: "difficulty resisting compulsions",
        options: &RESIST_COMPULSIONS,
    },
    Item {
        position: 10,
        prompt: "How strong is the drive to perform the compulsive behavior? How much control do you have over the compulsions?",
        symptom: "lack of control over compulsive behaviors",
        options: &CONTROL_COMPULSIONS,
    },
];

static BANDS: [SeverityBand; 5] = [
    SeverityBand { upper: Some(7), label: "subclinical" },
    SeverityBand { upper: Some(15), label: "mild" },
    SeverityBand { upper: Some(23), label: "moderate" },
    SeverityBand { upper: Some(31), label: "severe" },
    SeverityBand { upper: None, label: "extreme" },
];

static SUBSCALES: [Subscale; 2] = [
    Subscale {
        id: "obsessions",
        name: "Obsessions",
        first: 1,
        last: 5,
    },
    Subscale {
        id: "compulsions",
        name: "Compulsions",
        first: 6,
        last: 10,
    },
];

impl Instrument for Ybocs {
    fn id(&self) -> InstrumentId {
        InstrumentId::Ybocs
    }

    fn name(&self) -> &'static str {
        "Y-BOCS"
    }

    fn items(&self) -> &'static [Item] {
        &ITEMS
    }

    fn severity_bands(&self) -> &'static [SeverityBand] {
        &BANDS
    }

    fn subscales(&self) -> &'static [Subscale] {
        &SUBSCALES
    }

    fn domain_adjective(&self) -> &'static str {
        "obsessive-compulsive"
    }

    fn score_label(&self) -> &'static str {
        "Y-BOCS Total"
    }
}
