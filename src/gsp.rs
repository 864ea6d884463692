//! GSP group membership spans, keyed by market participant code.
//!
//! Generated by `generate_tables` from a local copy of the industry's
//! GSP_Group_Distributor CSV extract. Do not edit by hand; rerun the tool
//! against a newer extract instead.

use crate::codes::GspSpan;

pub static GSP_GROUPS: &[GspSpan] = &[
    GspSpan { participant_id: "EDFI", gsp_group_id: "_C", from: "09/11/2004", to: Some("23/05/2014") },
    GspSpan { participant_id: "EELC", gsp_group_id: "_A", from: "01/04/1998", to: None },
    GspSpan { participant_id: "EMEB", gsp_group_id: "_B", from: "01/04/1998", to: None },
    GspSpan { participant_id: "ETCL", gsp_group_id: "_A", from: "01/10/2003", to: None },
    GspSpan { participant_id: "ETCL", gsp_group_id: "_B", from: "01/10/2003", to: None },
    GspSpan { participant_id: "ETCL", gsp_group_id: "_E", from: "17/05/2010", to: None },
    GspSpan { participant_id: "ETCL", gsp_group_id: "_L", from: "17/05/2010", to: None },
    GspSpan { participant_id: "FEAL", gsp_group_id: "_B", from: "20/07/2015", to: None },
    GspSpan { participant_id: "FEAL", gsp_group_id: "_M", from: "20/07/2015", to: None },
    GspSpan { participant_id: "FORB", gsp_group_id: "_A", from: "11/03/2019", to: None },
    GspSpan { participant_id: "GGEN", gsp_group_id: "_A", from: "03/03/2014", to: None },
    GspSpan { participant_id: "GGEN", gsp_group_id: "_K", from: "03/03/2014", to: None },
    GspSpan { participant_id: "GUCL", gsp_group_id: "_B", from: "28/03/2006", to: None },
    GspSpan { participant_id: "GUCL", gsp_group_id: "_E", from: "28/03/2006", to: None },
    GspSpan { participant_id: "GUCL", gsp_group_id: "_G", from: "05/09/2011", to: None },
    GspSpan { participant_id: "HARL", gsp_group_id: "_B", from: "02/07/2012", to: None },
    GspSpan { participant_id: "HARL", gsp_group_id: "_C", from: "02/07/2012", to: None },
    GspSpan { participant_id: "HYDE", gsp_group_id: "_P", from: "01/04/1998", to: None },
    GspSpan { participant_id: "INDI", gsp_group_id: "_G", from: "24/06/2019", to: None },
    GspSpan { participant_id: "IPNL", gsp_group_id: "_A", from: "01/10/2003", to: None },
    GspSpan { participant_id: "IPNL", gsp_group_id: "_C", from: "01/10/2003", to: None },
    GspSpan { participant_id: "IPNL", gsp_group_id: "_H", from: "14/06/2005", to: None },
    GspSpan { participant_id: "IPNL", gsp_group_id: "_J", from: "14/06/2005", to: None },
    GspSpan { participant_id: "LENG", gsp_group_id: "_A", from: "22/02/2005", to: None },
    GspSpan { participant_id: "LENG", gsp_group_id: "_H", from: "10/01/2007", to: None },
    GspSpan { participant_id: "LENG", gsp_group_id: "_J", from: "22/02/2005", to: None },
    GspSpan { participant_id: "LOND", gsp_group_id: "_C", from: "01/04/1998", to: None },
    GspSpan { participant_id: "MANW", gsp_group_id: "_D", from: "01/04/1998", to: None },
    GspSpan { participant_id: "MIDE", gsp_group_id: "_E", from: "01/04/1998", to: None },
    GspSpan { participant_id: "MPDL", gsp_group_id: "_C", from: "15/12/2014", to: None },
    GspSpan { participant_id: "NEEB", gsp_group_id: "_F", from: "01/04/1998", to: None },
    GspSpan { participant_id: "NORW", gsp_group_id: "_G", from: "01/04/1998", to: None },
    GspSpan { participant_id: "PENL", gsp_group_id: "_D", from: "29/04/2013", to: None },
    GspSpan { participant_id: "PENL", gsp_group_id: "_G", from: "29/04/2013", to: None },
    GspSpan { participant_id: "SEEB", gsp_group_id: "_J", from: "01/04/1998", to: None },
    GspSpan { participant_id: "SOUT", gsp_group_id: "_H", from: "01/04/1998", to: None },
    GspSpan { participant_id: "SPOW", gsp_group_id: "_N", from: "01/04/1998", to: None },
    GspSpan { participant_id: "SWAE", gsp_group_id: "_K", from: "01/04/1998", to: None },
    GspSpan { participant_id: "SWEB", gsp_group_id: "_L", from: "01/04/1998", to: None },
    GspSpan { participant_id: "UDNL", gsp_group_id: "_E", from: "18/11/2013", to: None },
    GspSpan { participant_id: "UDNL", gsp_group_id: "_F", from: "18/11/2013", to: None },
    GspSpan { participant_id: "UKPD", gsp_group_id: "_C", from: "10/06/2013", to: None },
    GspSpan { participant_id: "UKPD", gsp_group_id: "_J", from: "10/06/2013", to: None },
    GspSpan { participant_id: "VATT", gsp_group_id: "_C", from: "05/02/2018", to: None },
    GspSpan { participant_id: "VATT", gsp_group_id: "_H", from: "05/02/2018", to: None },
    GspSpan { participant_id: "YELG", gsp_group_id: "_M", from: "01/04/1998", to: None },
];
