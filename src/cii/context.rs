/// XRechnung 3.0 guideline identifier (BT-24).
pub const XRECHNUNG_GUIDELINE_ID: &str =
    "urn:cen.eu:en16931:2017#compliant#urn:xeinkauf.de:kosit:xrechnung_3.0";

/// Plain EN 16931 guideline identifier.
pub const EN16931_GUIDELINE_ID: &str = "urn:cen.eu:en16931:2017";

/// Factur-X / ZUGFeRD EN 16931 profile identifier.
pub const FACTURX_GUIDELINE_ID: &str = "urn:cen.eu:en16931:2017#conformant#urn:factur-x.eu:1p0:en16931";

/// Peppol BIS Billing 3.0 guideline identifier.
pub const PEPPOL_GUIDELINE_ID: &str =
    "urn:cen.eu:en16931:2017#compliant#urn:fdc:peppol.eu:2017:poacc:billing:3.0";

/// Peppol BIS Billing business process identifier (BT-23).
pub const PEPPOL_PROCESS_ID: &str = "urn:fdc:peppol.eu:2017:poacc:billing:01:1.0";

/// CII guideline a document is generated for (BT-23/BT-24).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Context {
    /// Plain EN 16931.
    #[default]
    En16931,
    /// German public sector (XRechnung 3.0).
    XRechnung,
    /// Factur-X / ZUGFeRD EN 16931 profile.
    FacturX,
    /// Peppol BIS Billing 3.0.
    Peppol,
}

impl Context {
    /// Value of `GuidelineSpecifiedDocumentContextParameter/ID`.
    pub fn guideline_id(&self) -> &'static str {
        match self {
            Self::En16931 => EN16931_GUIDELINE_ID,
            Self::XRechnung => XRECHNUNG_GUIDELINE_ID,
            Self::FacturX => FACTURX_GUIDELINE_ID,
            Self::Peppol => PEPPOL_GUIDELINE_ID,
        }
    }

    /// Value of `BusinessProcessSpecifiedDocumentContextParameter/ID`, if the
    /// guideline requires one.
    pub fn business_process_id(&self) -> Option<&'static str> {
        match self {
            Self::XRechnung | Self::Peppol => Some(PEPPOL_PROCESS_ID),
            Self::En16931 | Self::FacturX => None,
        }
    }

    /// Identify the context from a guideline ID found in a document.
    pub fn from_guideline(id: &str) -> Option<Self> {
        [Self::En16931, Self::XRechnung, Self::FacturX, Self::Peppol]
            .into_iter()
            .find(|c| c.guideline_id() == id.trim())
    }
}
