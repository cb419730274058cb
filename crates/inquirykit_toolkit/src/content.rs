//! Literal workbook content: overview text, phase checklists, seeded risks,
//! the statutory matrix and budget categories.

use crate::conf::{
    C_PHASE_CROSS_CUTTING, C_SHEET_CP_REGISTER, C_SHEET_DECISION_LOG, C_SHEET_STAKEHOLDER_MAP,
    C_TAB_CP_REGISTER, C_TAB_DECISION_LOG, C_TAB_STAKEHOLDER_MAP, TUP_COLUMNS_CP_REGISTER,
    TUP_COLUMNS_DECISION_LOG, TUP_COLUMNS_STAKEHOLDER_MAP,
};
use crate::spec::{
    EnumLevel, SpecChecklistItem, SpecMatrixRow, SpecPhase, SpecRegisterSheet, SpecRisk,
};

const fn item(
    action: &'static str,
    guidance: &'static str,
    priority: EnumLevel,
    role: &'static str,
) -> SpecChecklistItem {
    SpecChecklistItem {
        action,
        guidance,
        priority,
        role,
    }
}

////////////////////////////////////////////////////////////////////////////////
// #region Titles

pub const C_TITLE_OVERVIEW: &str = "Public Inquiry Consulting Toolkit";
pub const C_SUBTITLE_OVERVIEW: &str = "Lifecycle Management Workbook";
pub const C_HEADING_OVERVIEW_INSTRUCTIONS: &str = "How to use this workbook";

pub const C_TITLE_RISK_REGISTER: &str = "Risk Register";
pub const C_SUBTITLE_RISK_REGISTER: &str = "Common pitfalls and risks across the inquiry lifecycle";

pub const C_TITLE_STATUTORY_MATRIX: &str = "Statutory vs Non-Statutory Decision Matrix";
pub const C_SUBTITLE_STATUTORY_MATRIX: &str = "Key differences to inform scoping advice";

pub const C_TITLE_BUDGET_TRACKER: &str = "Budget Tracker";
pub const C_SUBTITLE_BUDGET_TRACKER: &str = "Monitoring inquiry expenditure against budget";
pub const C_LABEL_BUDGET_TOTAL: &str = "TOTAL";

pub const SPEC_DECISION_LOG: SpecRegisterSheet = SpecRegisterSheet {
    name: C_SHEET_DECISION_LOG,
    title: "Decision Log",
    subtitle: "Capturing key decisions for institutional memory",
    tab_color: C_TAB_DECISION_LOG,
    columns: &TUP_COLUMNS_DECISION_LOG,
    if_autofilter: true,
};

pub const SPEC_CP_REGISTER: SpecRegisterSheet = SpecRegisterSheet {
    name: C_SHEET_CP_REGISTER,
    title: "Core Participant Register",
    subtitle: "Tracking core participants, legal representation, and funding",
    tab_color: C_TAB_CP_REGISTER,
    columns: &TUP_COLUMNS_CP_REGISTER,
    if_autofilter: false,
};

pub const SPEC_STAKEHOLDER_MAP: SpecRegisterSheet = SpecRegisterSheet {
    name: C_SHEET_STAKEHOLDER_MAP,
    title: "Stakeholder Map",
    subtitle: "Key relationships and engagement approach",
    tab_color: C_TAB_STAKEHOLDER_MAP,
    columns: &TUP_COLUMNS_STAKEHOLDER_MAP,
    if_autofilter: false,
};

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Overview

pub const L_OVERVIEW_INFO: [(&str, &str); 10] = [
    ("Inquiry Name:", ""),
    ("Type:", "Statutory / Non-Statutory"),
    ("Sponsoring Department:", ""),
    ("Chair:", ""),
    ("Secretary:", ""),
    ("Solicitor:", ""),
    ("Counsel:", ""),
    ("Date Established:", ""),
    ("Terms of Reference Date:", ""),
    ("Target Report Date:", ""),
];

pub const L_OVERVIEW_INSTRUCTIONS: [&str; 6] = [
    "Each tab corresponds to a phase of the inquiry lifecycle. Use the checklists to track progress.",
    "The Decision Log captures key decisions for institutional memory — fill it as you go.",
    "The Risk Register flags common pitfalls. Review it at each phase transition.",
    "The Statutory vs Non-Statutory tab helps frame early scoping conversations.",
    "The Budget Tracker, CP Register, and Stakeholder Map are cross-cutting tools.",
    "Status options: Not Started | In Progress | Complete | N/A | Blocked",
];

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Phases

const L_ITEMS_PHASE_1: &[SpecChecklistItem] = &[
    item(
        "Confirm statutory basis",
        "Determine whether inquiry will be statutory (Inquiries Act 2005) or non-statutory. Assess need for compulsion powers, public hearing presumption, and legal framework implications.",
        EnumLevel::High,
        "Sponsor / Minister",
    ),
    item(
        "Draft and consult on terms of reference",
        "Terms should set out purpose, matters to investigate, whether recommendations required, reporting line, publication responsibility, and realistic scope. Consult PM, Cabinet Office, devolved administrations, GLD, chair, and affected parties.",
        EnumLevel::High,
        "Sponsor / Minister",
    ),
    item(
        "Assess ECHR obligations",
        "Consider whether Articles 2 or 3 create investigative obligations requiring a public inquiry. Take legal advice.",
        EnumLevel::High,
        "GLD / Sponsor",
    ),
    item(
        "Check concurrent proceedings",
        "Identify any criminal investigations, inquests, regulatory investigations, or civil proceedings that may affect timing, scope, or conduct. Consult Attorney General if needed.",
        EnumLevel::High,
        "Sponsor / GLD",
    ),
    item(
        "Scoping exercise",
        "Officials should examine key issues, likely timescale, cost, volume of evidence, and number of potential witnesses and participants.",
        EnumLevel::High,
        "Sponsor Team",
    ),
    item(
        "Consult previous administrations",
        "If events occurred under a prior government, consult former ministers via Cabinet Secretary before announcement.",
        EnumLevel::Medium,
        "Cabinet Secretary",
    ),
    item(
        "Public Sector Equality Duty assessment",
        "Document how PSED has been considered in decisions about establishing the inquiry and framing terms of reference.",
        EnumLevel::Medium,
        "Sponsor",
    ),
    item(
        "Prepare announcement",
        "Draft ministerial statement including full terms of reference, chair name, panel details, and relevant part of UK. Parliament first when in session.",
        EnumLevel::High,
        "Sponsor / Private Office",
    ),
    item(
        "Publish terms of reference",
        "Finalise and publish. Ensure they are clear, unambiguous, deliverable, and do not extend beyond what is necessary.",
        EnumLevel::High,
        "Chair / Sponsor",
    ),
    item(
        "Commission cost and duration estimate",
        "Provide minister with best assessment of costs, uncertainties, and risks. Reference benchmarks from comparable inquiries.",
        EnumLevel::Medium,
        "Sponsor / Secretary",
    ),
];

const L_ITEMS_PHASE_2: &[SpecChecklistItem] = &[
    item(
        "Appoint chair",
        "Identify and appoint chair with appropriate expertise, integrity, leadership, and communication skills. Consult PM for judicial appointments. Consider diversity.",
        EnumLevel::High,
        "Minister / Sponsor",
    ),
    item(
        "Assess need for panel members",
        "Decide whether chair sits alone or with panel. If panel, identify subject matter expertise gaps. Chair must be consulted.",
        EnumLevel::High,
        "Minister / Chair",
    ),
    item(
        "Appoint inquiry secretary",
        "Usually Deputy Director to DG seniority. Key adviser to chair on policy and procedures, responsible for budget and team leadership.",
        EnumLevel::High,
        "Sponsor / Chair",
    ),
    item(
        "Appoint solicitor to the inquiry",
        "Usually from GLD. Main source of legal and procedural advice. Appoint early to avoid procedural issues.",
        EnumLevel::High,
        "Chair / GLD",
    ),
    item(
        "Assess need for and appoint counsel",
        "Required for complex statutory inquiries. Fair, open, non-discriminatory appointment process. Significant cost implications.",
        EnumLevel::High,
        "Chair / Solicitor",
    ),
    item(
        "Agree engagement letters and terms",
        "Cover role, accountability, conflict management, pay, and duration. HM Treasury approval if pay exceeds thresholds.",
        EnumLevel::High,
        "Sponsor / Secretary",
    ),
    item(
        "National security vetting",
        "Consider appropriate vetting level for chair, panel, and key staff based on nature of inquiry and material likely to be handled.",
        EnumLevel::Medium,
        "Secretary / Sponsor",
    ),
    item(
        "Conflict of interest checks",
        "Screen all appointees for conflicts. Document assessment. Consider both actual and perceived conflicts.",
        EnumLevel::High,
        "Secretary",
    ),
    item(
        "Build wider secretariat",
        "Recruit across: subject matter expertise, operations, information management, communications, HR, finance, security. Staff work independently of parent departments.",
        EnumLevel::Medium,
        "Secretary",
    ),
    item(
        "Agree staff welfare and support arrangements",
        "Consider impact of potentially distressing material. Plan trauma-informed training and psychological support from outset.",
        EnumLevel::Medium,
        "Secretary",
    ),
    item(
        "Plan for return of staff to parent departments",
        "Put arrangements in place for Civil Service staff redeployment at inquiry conclusion. Complete reports and appraisals.",
        EnumLevel::Low,
        "Secretary / HR",
    ),
];

const L_ITEMS_PHASE_3: &[SpecChecklistItem] = &[
    item(
        "Identify and secure hearing venue",
        "Consider: proximity to affected communities, cost, accessibility, public and media capacity, security, separation of participants. Not automatically London.",
        EnumLevel::High,
        "Secretary / Sponsor",
    ),
    item(
        "Secure office accommodation",
        "Sufficient, accessible space with appropriate IT. May co-locate with sponsor department if independence not compromised.",
        EnumLevel::High,
        "Secretary / Sponsor",
    ),
    item(
        "Procure IT systems — basic infrastructure",
        "Laptops, phones, inquiry-branded email, document storage, collaboration tools, access to departmental HR/finance systems.",
        EnumLevel::High,
        "Secretary / Sponsor IT",
    ),
    item(
        "Procure eDiscovery / evidence management system",
        "Required by almost all inquiries for secure evidence storage, review, and management. Do not underestimate procurement timeframes.",
        EnumLevel::High,
        "Secretary / Solicitor",
    ),
    item(
        "Set up secure document transfer capability",
        "For receiving sensitive material from information providers.",
        EnumLevel::High,
        "Secretary / IT",
    ),
    item(
        "Commission inquiry website",
        "Host away from gov.uk. GDS-agreed domain. Content: terms of reference, team bios, procedures, hearing info, transcripts, costs, contact details.",
        EnumLevel::High,
        "Secretary / Comms",
    ),
    item(
        "Establish physical security arrangements",
        "Agree with sponsor department. Cover office, hearing centre, hard copy documents.",
        EnumLevel::High,
        "Secretary / DSO",
    ),
    item(
        "Establish data security protocols",
        "Align with HMG Security Policy Framework. Cover how evidence is held, managed, disclosed, and handle sensitive material.",
        EnumLevel::High,
        "Secretary / DPO",
    ),
    item(
        "Agree vetting levels for all staff",
        "Commensurate with role and inquiry nature. Complete before staff access documents or data.",
        EnumLevel::High,
        "Secretary / DSO",
    ),
    item(
        "Procure hearing room broadcast and transcription",
        "Electronic hearing support, audiovisual broadcast, live transcription services. Consider copyright for AV recordings.",
        EnumLevel::Medium,
        "Secretary / Sponsor",
    ),
    item(
        "Engage National Archives early",
        "For guidance on records management, website preservation, Crown copyright, and archiving planning from the start.",
        EnumLevel::Medium,
        "Secretary",
    ),
    item(
        "Register as data controller with ICO",
        "Inquiry is independent data controller. Appoint DPO, produce privacy notice and data protection policy.",
        EnumLevel::High,
        "Secretary / DPO",
    ),
];

const L_ITEMS_PHASE_4: &[SpecChecklistItem] = &[
    item(
        "Develop issues list from terms of reference",
        "Led by solicitor and counsel. Treat as living document, kept under review. Share with core participants for proposed additions.",
        EnumLevel::High,
        "Solicitor / Counsel",
    ),
    item(
        "Publish provisional timetable",
        "Include dates for evidence requests, witness statements, oral proceedings, and proposed report publication date. Update regularly.",
        EnumLevel::High,
        "Chair / Secretary",
    ),
    item(
        "Draft and publish core participant designation protocol",
        "Set out criteria, process, and approach. Consider phase-specific designation.",
        EnumLevel::High,
        "Chair / Solicitor",
    ),
    item(
        "Draft protocol on legal representation and funding",
        "Set out approach to public funding of representation. Account for any Section 40 ministerial determination. Include cost controls.",
        EnumLevel::High,
        "Chair / Solicitor",
    ),
    item(
        "Request Section 40 determination from minister",
        "Determines conditions and qualifications on chair's power to award legal costs. Do this shortly after terms of reference finalised.",
        EnumLevel::High,
        "Sponsor / Secretary",
    ),
    item(
        "Draft disclosure and document handling protocol",
        "Cover how inquiry requests, receives, reviews, and discloses documents. Include redaction approach and confidentiality undertakings.",
        EnumLevel::High,
        "Solicitor / Counsel",
    ),
    item(
        "Draft witness statement protocol",
        "Set out process for requesting and preparing statements — whether witness-led, inquiry-led, or hybrid approach.",
        EnumLevel::High,
        "Solicitor / Counsel",
    ),
    item(
        "Draft hearing procedure protocol",
        "Cover questioning of witnesses, role of counsel, opening/closing statements, support for witnesses, breaks, and access arrangements.",
        EnumLevel::Medium,
        "Solicitor / Counsel",
    ),
    item(
        "Establish media engagement strategy",
        "Press office support, approach to broadcasting hearings, transcript publication, media statements at key milestones.",
        EnumLevel::Medium,
        "Secretary / Comms",
    ),
    item(
        "Draft restriction order / notice protocol",
        "Set out approach to restricting attendance, disclosure, or publication. Cover process for applications.",
        EnumLevel::Medium,
        "Solicitor",
    ),
    item(
        "Draft redaction protocol",
        "Process for redacting personal details and irrelevant information from disclosed material. Include representations process for information providers.",
        EnumLevel::Medium,
        "Solicitor",
    ),
    item(
        "Agree management statement with sponsor department",
        "Set out respective roles, responsibilities, and procedures to manage independence/accountability balance.",
        EnumLevel::Medium,
        "Secretary / Sponsor",
    ),
    item(
        "Develop internal working practices",
        "Staff code of conduct, information handling, communication channels, escalation procedures.",
        EnumLevel::Medium,
        "Secretary",
    ),
];

const L_ITEMS_PHASE_5: &[SpecChecklistItem] = &[
    item(
        "Issue written requests for documentary evidence",
        "Identify information holders. Craft requests carefully — sufficiently broad but targeted. Set deadlines and format requirements.",
        EnumLevel::High,
        "Solicitor / Counsel",
    ),
    item(
        "Manage incoming document volumes",
        "Review for relevance against terms of reference and issues list. Log, index, and store securely in evidence management system.",
        EnumLevel::High,
        "Solicitor / Evidence Team",
    ),
    item(
        "Assess need for Section 21 compulsion notices",
        "For statutory inquiries where informal requests are not complied with, or where providers need formal cover for disclosure.",
        EnumLevel::Medium,
        "Chair / Solicitor",
    ),
    item(
        "Handle privilege claims and PII applications",
        "Take legal advice on claims under Section 22 (legal professional privilege, self-incrimination, parliamentary proceedings). Manage PII balancing exercise.",
        EnumLevel::Medium,
        "Solicitor / Counsel",
    ),
    item(
        "Prepare and issue witness statement requests",
        "Rule 9 requests for statutory inquiries. Develop approach: witness-led, inquiry-led interview, or hybrid. Set timelines.",
        EnumLevel::High,
        "Solicitor / Counsel",
    ),
    item(
        "Conduct witness interviews where inquiry-led",
        "Prepare interview plans. Consider vulnerability, support needs, interpreters. Produce statement for witness approval.",
        EnumLevel::Medium,
        "Solicitor / Counsel",
    ),
    item(
        "Disclose relevant material to core participants",
        "Via document management system. Subject to redactions and confidentiality undertakings. Disclose witness statements before oral evidence.",
        EnumLevel::High,
        "Solicitor",
    ),
    item(
        "Manage ongoing disclosure requests and challenges",
        "Handle disputes about scope, relevance, privilege. Keep disclosure log updated.",
        EnumLevel::Medium,
        "Solicitor",
    ),
    item(
        "Commission expert reports or establish expert groups",
        "Where specialist knowledge needed to understand evidence or support recommendations.",
        EnumLevel::Medium,
        "Chair / Counsel",
    ),
    item(
        "Consider innovative evidence-gathering methods",
        "Seminars, site visits, intermediaries for vulnerable witnesses, listening exercises, pen portraits / commemoration hearings.",
        EnumLevel::Low,
        "Chair / Solicitor",
    ),
    item(
        "Conduct National Archives searches",
        "Use Discovery catalogue. Arrange private access at Kew. Request digital copies as needed.",
        EnumLevel::Low,
        "Solicitor / Evidence Team",
    ),
    item(
        "Ongoing review and refinement of issues list",
        "As evidence emerges, update the issues list. Consult core participants on proposed changes.",
        EnumLevel::Medium,
        "Solicitor / Counsel",
    ),
];

const L_ITEMS_PHASE_6: &[SpecChecklistItem] = &[
    item(
        "Plan and hold preliminary hearing(s)",
        "Set out outline plan, approach to core participants, legal representation, funding, and procedures. Invite evidence from others.",
        EnumLevel::High,
        "Chair / Counsel",
    ),
    item(
        "Prepare hearing timetable",
        "Sequence witnesses logically. Build in breaks, administrative time, and contingency. Publish and share with core participants.",
        EnumLevel::High,
        "Counsel / Solicitor",
    ),
    item(
        "Prepare opening statement",
        "Chair or counsel sets out background, investigative work, issues for oral evidence, procedures, and timescales.",
        EnumLevel::High,
        "Counsel / Chair",
    ),
    item(
        "Witness preparation meetings",
        "Counsel meets witnesses in advance. Explain process, manage expectations, identify support needs.",
        EnumLevel::High,
        "Counsel / Solicitor",
    ),
    item(
        "Manage witness support during hearings",
        "Personal supporters, breaks, psychological support, accessible facilities. Especially for vulnerable witnesses and core participants.",
        EnumLevel::High,
        "Secretary / Ops",
    ),
    item(
        "Conduct oral evidence sessions",
        "Counsel questions witnesses. Manage applications from core participant counsel to ask questions. Chair maintains control.",
        EnumLevel::High,
        "Chair / Counsel",
    ),
    item(
        "Manage core participant engagement during hearings",
        "Handle suggested questions, disclosure of new material, applications for additional witnesses.",
        EnumLevel::Medium,
        "Counsel / Solicitor",
    ),
    item(
        "Publish daily transcripts",
        "Corrected transcripts on inquiry website same day or next morning. Include necessary redactions.",
        EnumLevel::High,
        "Secretary / Ops",
    ),
    item(
        "Manage live broadcast of proceedings",
        "Ensure reliable streaming. Handle any restriction orders requiring closed sessions.",
        EnumLevel::Medium,
        "Secretary / IT",
    ),
    item(
        "Handle closed or private hearing sessions",
        "Where restriction orders or notices require it. Manage separate transcription and record-keeping.",
        EnumLevel::Medium,
        "Chair / Solicitor",
    ),
    item(
        "Receive closing statements from core participants",
        "Set aside time after oral evidence. Provides opportunity for observations and suggested recommendations.",
        EnumLevel::Medium,
        "Chair / Counsel",
    ),
    item(
        "Manage media throughout hearing period",
        "Press statements, briefings, managing public interest. Maintain balance with sub judice concerns.",
        EnumLevel::Medium,
        "Secretary / Comms",
    ),
    item(
        "Monitor for judicial review risk",
        "Track procedural decisions that could be challenged. Document reasoning. 14-day challenge window.",
        EnumLevel::Medium,
        "Solicitor",
    ),
];

const L_ITEMS_PHASE_7: &[SpecChecklistItem] = &[
    item(
        "Agree report writing approach",
        "Who drafts which sections — counsel, solicitor, chair, or combination. Consider engaging editor or copy-editor for style consistency.",
        EnumLevel::High,
        "Chair",
    ),
    item(
        "Draft report",
        "Must address terms of reference, be supported by evidence, use clear language, include executive summary and recommendations.",
        EnumLevel::High,
        "Chair / Counsel",
    ),
    item(
        "Conduct Maxwellisation / warning letter process",
        "Send warning letters to anyone who may be subject of explicit or significant criticism. Allow reasonable time for representations.",
        EnumLevel::High,
        "Chair / Solicitor",
    ),
    item(
        "Reviews and checks before publication",
        "Full review for personal data, protected information, accuracy of evidence references, typographical errors, and escaped criticisms.",
        EnumLevel::High,
        "Solicitor / Editor",
    ),
    item(
        "Agree publication responsibility and process",
        "Confirm whether minister or chair publishes. Agree practical steps including sensitivity checking by sponsor department.",
        EnumLevel::High,
        "Chair / Sponsor",
    ),
    item(
        "Manage advance access for minister",
        "Balance minister's need to prepare parliamentary response against perception of independence and victims' expectations.",
        EnumLevel::High,
        "Chair / Secretary",
    ),
    item(
        "Organise lock-in for core participants",
        "Venue, security, separate rooms if needed, device surrender, confidentiality undertakings, staggered access periods.",
        EnumLevel::High,
        "Secretary / Ops",
    ),
    item(
        "Arrange laying before Parliament",
        "Coordinate with parliamentary authorities. Prepare written or oral ministerial statement. Arrange opposition leader access.",
        EnumLevel::High,
        "Sponsor / Secretary",
    ),
    item(
        "Publish report",
        "Website publication, chair's public statement, print run for key recipients. Coordinate timing with parliamentary laying.",
        EnumLevel::High,
        "Chair / Secretary",
    ),
    item(
        "Prepare and submit lessons learned paper",
        "Secretary writes within two months of inquiry end. Cover timetable, costs, accommodation, IT, sponsor relationship, difficulties, good practice.",
        EnumLevel::High,
        "Secretary",
    ),
    item(
        "Terminate contracts and vacate premises",
        "Hearing space, offices, IT equipment, phone lines, email accounts, utilities. Allow buffer period for unexpected applications.",
        EnumLevel::Medium,
        "Secretary / Ops",
    ),
    item(
        "Archive and transfer records to National Archives",
        "Index all documents. Destroy duplicates methodically with destruction record. Transfer to TNA or sponsor department as directed.",
        EnumLevel::High,
        "Secretary / TNA",
    ),
    item(
        "Communicate inquiry closure to stakeholders",
        "Advance notice of when phone lines and email will cease. Direct future queries to sponsor department.",
        EnumLevel::Medium,
        "Secretary / Comms",
    ),
    item(
        "Transition witness and stakeholder support",
        "Agree with sponsor department what support continues, in what form, and who funds it.",
        EnumLevel::Medium,
        "Secretary / Sponsor",
    ),
    item(
        "Monitor recommendation implementation",
        "Consider chair's ongoing role. Government should respond within six months. Annual updates to Parliament until closed.",
        EnumLevel::Medium,
        "Chair / Sponsor",
    ),
];

pub const L_PHASES: [SpecPhase; 7] = [
    SpecPhase {
        name: "1. Establish & Scope",
        tab_color: "2C3E6B",
        subtitle: "From announcement through to finalised terms of reference",
        items: L_ITEMS_PHASE_1,
    },
    SpecPhase {
        name: "2. Appointments & Team",
        tab_color: "3A5BA0",
        subtitle: "Appointing the chair, panel, counsel, secretary and building the team",
        items: L_ITEMS_PHASE_2,
    },
    SpecPhase {
        name: "3. Infrastructure & Ops",
        tab_color: "4A7FB5",
        subtitle: "Venue, IT, security, accommodation and operational setup",
        items: L_ITEMS_PHASE_3,
    },
    SpecPhase {
        name: "4. Protocols & Procedures",
        tab_color: "5B9BD5",
        subtitle: "Establishing the rules of engagement for the inquiry's work",
        items: L_ITEMS_PHASE_4,
    },
    SpecPhase {
        name: "5. Evidence & Investigation",
        tab_color: "70AD47",
        subtitle: "Gathering documentary evidence and witness statements",
        items: L_ITEMS_PHASE_5,
    },
    SpecPhase {
        name: "6. Hearings",
        tab_color: "BF8F00",
        subtitle: "Preliminary hearings, oral evidence, and public proceedings",
        items: L_ITEMS_PHASE_6,
    },
    SpecPhase {
        name: "7. Report & Closure",
        tab_color: "C00000",
        subtitle: "Writing the report, Maxwellisation, publication, and closing down",
        items: L_ITEMS_PHASE_7,
    },
];

/// Phase names followed by the cross-cutting label, as offered in phase dropdowns.
pub fn derive_phase_options() -> Vec<&'static str> {
    L_PHASES
        .iter()
        .map(|phase| phase.name)
        .chain(std::iter::once(C_PHASE_CROSS_CUTTING))
        .collect()
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Risks

pub const L_RISKS: [SpecRisk; 18] = [
    SpecRisk {
        phase: "1. Establish & Scope",
        description: "Terms of reference too broad or ambiguous, leading to scope creep, cost overruns, and delay",
        likelihood: EnumLevel::Medium,
        impact: EnumLevel::High,
        mitigation: "Ensure ToR are clear, unambiguous, and deliverable. Consult widely. Include explicit exclusions.",
        owner: "Chair / Sponsor",
    },
    SpecRisk {
        phase: "1. Establish & Scope",
        description: "Failure to identify concurrent criminal proceedings, causing prejudice or requiring delay",
        likelihood: EnumLevel::Medium,
        impact: EnumLevel::High,
        mitigation: "Conduct thorough check with CPS, police, and Attorney General before establishment.",
        owner: "Sponsor / GLD",
    },
    SpecRisk {
        phase: "2. Appointments & Team",
        description: "Chair appointment challenged on grounds of bias or conflict of interest",
        likelihood: EnumLevel::Low,
        impact: EnumLevel::High,
        mitigation: "Thorough conflict screening. Document assessment. Consider judicial review risk in selection.",
        owner: "Sponsor",
    },
    SpecRisk {
        phase: "2. Appointments & Team",
        description: "Difficulty recruiting experienced secretary or solicitor, delaying start",
        likelihood: EnumLevel::Medium,
        impact: EnumLevel::Medium,
        mitigation: "Begin recruitment early. Consider secondments from other inquiries. Cabinet Office can advise.",
        owner: "Sponsor",
    },
    SpecRisk {
        phase: "3. Infrastructure & Ops",
        description: "IT procurement delays leaving inquiry without evidence management system",
        likelihood: EnumLevel::Medium,
        impact: EnumLevel::High,
        mitigation: "Do not underestimate procurement timeframes. Have plan ready for incoming chair. Consider framework agreements.",
        owner: "Secretary / Sponsor",
    },
    SpecRisk {
        phase: "3. Infrastructure & Ops",
        description: "Data breach of sensitive evidence material",
        likelihood: EnumLevel::Low,
        impact: EnumLevel::High,
        mitigation: "Robust data security from day one. Align with HMG Security Policy Framework. Vetting before access.",
        owner: "Secretary / DPO",
    },
    SpecRisk {
        phase: "4. Protocols & Procedures",
        description: "Core participants excluded from protocol development, leading to challenge or loss of cooperation",
        likelihood: EnumLevel::Medium,
        impact: EnumLevel::Medium,
        mitigation: "Consult core participants on draft protocols. Allow reasonable time for representations.",
        owner: "Chair / Solicitor",
    },
    SpecRisk {
        phase: "4. Protocols & Procedures",
        description: "Failure to make Section 40 determination early, causing funding disputes",
        likelihood: EnumLevel::Medium,
        impact: EnumLevel::Medium,
        mitigation: "Request determination shortly after ToR finalised. Publish costs protocol early.",
        owner: "Sponsor / Secretary",
    },
    SpecRisk {
        phase: "5. Evidence & Investigation",
        description: "Information providers fail to cooperate or delay disclosure",
        likelihood: EnumLevel::Medium,
        impact: EnumLevel::High,
        mitigation: "Escalate from informal to formal requests. Use Section 21 compulsion powers. Set clear deadlines.",
        owner: "Solicitor / Chair",
    },
    SpecRisk {
        phase: "5. Evidence & Investigation",
        description: "Overwhelmed by volume of disclosed material",
        likelihood: EnumLevel::High,
        impact: EnumLevel::Medium,
        mitigation: "Target requests carefully. Use eDiscovery tools. Prioritise review by relevance to issues list.",
        owner: "Solicitor / Evidence Team",
    },
    SpecRisk {
        phase: "6. Hearings",
        description: "Judicial review challenge to procedural decision causing delay",
        likelihood: EnumLevel::Medium,
        impact: EnumLevel::High,
        mitigation: "Document reasoning for all procedural decisions. Monitor 14-day challenge window. Budget for potential JR costs.",
        owner: "Solicitor",
    },
    SpecRisk {
        phase: "6. Hearings",
        description: "Inadequate witness support leading to poor evidence or reputational damage",
        likelihood: EnumLevel::Medium,
        impact: EnumLevel::Medium,
        mitigation: "Trauma-informed approach. Psychological support available. Personal supporters. Accessible facilities.",
        owner: "Secretary / Ops",
    },
    SpecRisk {
        phase: "7. Report & Closure",
        description: "Maxwellisation process takes longer than planned, delaying publication",
        likelihood: EnumLevel::High,
        impact: EnumLevel::Medium,
        mitigation: "Build sufficient time into timetable from outset. Set clear deadlines for representations.",
        owner: "Chair / Solicitor",
    },
    SpecRisk {
        phase: "7. Report & Closure",
        description: "Minister seeks extended advance access, undermining perception of independence",
        likelihood: EnumLevel::Medium,
        impact: EnumLevel::Medium,
        mitigation: "Agree advance access arrangements early. Limit to preparation of parliamentary response. Inquiry team present during review.",
        owner: "Chair / Secretary",
    },
    SpecRisk {
        phase: "7. Report & Closure",
        description: "Records not properly archived, creating future FOI and accountability problems",
        likelihood: EnumLevel::Medium,
        impact: EnumLevel::Medium,
        mitigation: "Engage National Archives from start. Plan records management throughout, not just at closure. Index all destroyed documents.",
        owner: "Secretary / TNA",
    },
    SpecRisk {
        phase: "Cross-cutting",
        description: "Budget overruns without adequate financial controls",
        likelihood: EnumLevel::High,
        impact: EnumLevel::High,
        mitigation: "Preliminary budget agreed early. Regular monitoring. Sponsor manages delegation per Managing Public Money principles.",
        owner: "Secretary / Sponsor",
    },
    SpecRisk {
        phase: "Cross-cutting",
        description: "Loss of public confidence due to perceived delays or lack of transparency",
        likelihood: EnumLevel::Medium,
        impact: EnumLevel::High,
        mitigation: "Publish provisional timetable and updates. Regular cost publication. Proactive communications strategy.",
        owner: "Chair / Secretary",
    },
    SpecRisk {
        phase: "Cross-cutting",
        description: "Staff burnout from distressing material and high-pressure environment",
        likelihood: EnumLevel::High,
        impact: EnumLevel::Medium,
        mitigation: "Welfare support from outset. Trauma-informed training. Regular check-ins. Access to counselling.",
        owner: "Secretary / HR",
    },
];

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region StatutoryMatrix

pub const L_STATUTORY_MATRIX: [SpecMatrixRow; 12] = [
    SpecMatrixRow {
        dimension: "Legal framework",
        statutory: "Governed by Inquiries Act 2005 and Inquiry Rules 2006. Codified powers and procedures.",
        non_statutory: "No binding legal framework. Chair determines procedure within terms of reference.",
        considerations: "Statutory provides certainty but less flexibility. Non-statutory allows innovation but carries risk of challenge on fairness grounds.",
    },
    SpecMatrixRow {
        dimension: "Power to compel evidence",
        statutory: "Chair can compel witnesses to attend, give evidence under oath, and produce documents (s.21). Criminal sanctions for non-compliance.",
        non_statutory: "No power to compel. Relies on voluntary cooperation. Minister should seek assurances from information providers.",
        considerations: "If cooperation is uncertain — particularly from reluctant organisations — statutory basis is strongly advisable.",
    },
    SpecMatrixRow {
        dimension: "Core participants",
        statutory: "Formal designation under Inquiry Rules with specific rights: opening/closing statements, advance disclosure, questioning through counsel.",
        non_statutory: "No formal concept. Chair may grant equivalent rights but no statutory basis. Sponsor may choose to fund representation.",
        considerations: "Core participant framework provides structure for managing multiple parties. Without it, managing participation requires careful protocol design.",
    },
    SpecMatrixRow {
        dimension: "Public hearings",
        statutory: "Rebuttable presumption of public hearings. Must do what is reasonable to ensure public access.",
        non_statutory: "No presumption. May be held largely in private if terms of reference allow.",
        considerations: "Public confidence often requires public hearings. If inquiry can operate effectively in private, non-statutory may be faster and cheaper.",
    },
    SpecMatrixRow {
        dimension: "Immunity",
        statutory: "Statutory immunity from civil action for inquiry personnel. Parliamentary privilege for reports.",
        non_statutory: "No statutory immunity. Sponsor department should provide indemnity in writing. Report may need parliamentary privilege via Return to an Address.",
        considerations: "Immunity is significant protection. Without it, inquiry personnel face greater personal risk. Indemnity arrangements must be robust.",
    },
    SpecMatrixRow {
        dimension: "Warning letters",
        statutory: "Mandatory under Inquiry Rules if report contains explicit or significant criticism. Formal Maxwellisation process.",
        non_statutory: "No statutory requirement, but fairness demands a similar process. Many non-statutory inquiries adopt equivalent procedures.",
        considerations: "Either way, budget time for Maxwellisation. Non-statutory inquiries that skip it risk challenge on fairness grounds.",
    },
    SpecMatrixRow {
        dimension: "Publication",
        statutory: "Minister responsible but can delegate to chair. Must lay before Parliament. Minister may withhold material on specified grounds.",
        non_statutory: "Minister responsible unless delegated to chair. Should be laid before Parliament. Consider Return to an Address for parliamentary privilege.",
        considerations: "Publication process is similar in practice. The key difference is the statutory protection for the report content.",
    },
    SpecMatrixRow {
        dimension: "FOI",
        statutory: "Not a public authority during lifetime — exempt from FOI requests. FOI applies after records deposited.",
        non_statutory: "Also not a public authority — exempt during lifetime. Same post-closure position.",
        considerations: "No practical difference during inquiry lifetime. Post-closure FOI obligations apply equally.",
    },
    SpecMatrixRow {
        dimension: "Judicial review",
        statutory: "Decisions subject to judicial review. 14-day time limit from awareness of decision.",
        non_statutory: "Decisions also subject to judicial review on same basis. Same 14-day time limit.",
        considerations: "Both are equally vulnerable to challenge. Statutory framework may actually reduce JR risk by providing clear procedural basis.",
    },
    SpecMatrixRow {
        dimension: "Cost and duration",
        statutory: "Often more expensive and longer. Average ~3 years for completed statutory inquiries since 2000.",
        non_statutory: "Generally cheaper and faster. Average ~2 years. But varies widely — some have exceeded statutory inquiries in duration.",
        considerations: "Cost saving is not guaranteed. A complex non-statutory inquiry can be just as expensive. The real driver is scope, not form.",
    },
    SpecMatrixRow {
        dimension: "Conversion",
        statutory: "N/A — already statutory.",
        non_statutory: "Can be converted to statutory under the Inquiries Act if cooperation fails or compulsion powers become necessary.",
        considerations: "Always consider whether non-statutory is viable first. Conversion is available as a fallback but causes disruption and delay.",
    },
    SpecMatrixRow {
        dimension: "Data protection",
        statutory: "Independent data controller. Must register with ICO, appoint DPO, produce privacy notice.",
        non_statutory: "Independent data controller. Same GDPR and Data Protection Act 2018 obligations.",
        considerations: "No practical difference. Both require full data protection compliance from the outset.",
    },
];

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Budget

pub const L_BUDGET_CATEGORIES: [&str; 20] = [
    "Chair and panel fees",
    "Counsel fees",
    "Solicitor and legal team costs",
    "Core participant legal costs",
    "Secretariat staff salaries",
    "Accommodation — office",
    "Accommodation — hearing venue",
    "IT systems and evidence management",
    "Website hosting and development",
    "Transcription services",
    "Broadcast and AV",
    "Witness expenses",
    "Witness and staff welfare support",
    "Travel and subsistence",
    "Security",
    "Communications and media",
    "Expert and assessor fees",
    "Printing and publication",
    "Archiving and records management",
    "Other / contingency",
];

// #endregion
////////////////////////////////////////////////////////////////////////////////
