//! Property-name vocabulary shared by models, view-models, and the change
//! relay. Notifications carry these exact strings.

pub const NUMMER: &str = "Nummer";
pub const NAVN: &str = "Navn";
pub const STATUS_DATO: &str = "StatusDato";
pub const STATUS_DATO_AS_TEXT: &str = "StatusDatoAsText";

pub const KONTONUMMER: &str = "Kontonummer";
pub const KONTONAVN: &str = "Kontonavn";
pub const BESKRIVELSE: &str = "Beskrivelse";
pub const NOTAT: &str = "Notat";
pub const KONTOGRUPPE: &str = "Kontogruppe";

pub const KREDIT: &str = "Kredit";
pub const KREDIT_AS_TEXT: &str = "KreditAsText";
pub const SALDO: &str = "Saldo";
pub const SALDO_AS_TEXT: &str = "SaldoAsText";
pub const DISPONIBEL: &str = "Disponibel";
pub const DISPONIBEL_AS_TEXT: &str = "DisponibelAsText";

pub const INDTAEGTER: &str = "Indtægter";
pub const INDTAEGTER_AS_TEXT: &str = "IndtægterAsText";
pub const UDGIFTER: &str = "Udgifter";
pub const UDGIFTER_AS_TEXT: &str = "UdgifterAsText";
pub const BUDGET: &str = "Budget";
pub const BUDGET_AS_TEXT: &str = "BudgetAsText";
pub const BOGFOERT: &str = "Bogført";
pub const BOGFOERT_AS_TEXT: &str = "BogførtAsText";

pub const DATO: &str = "Dato";
pub const DATO_AS_TEXT: &str = "DatoAsText";
pub const BILAG: &str = "Bilag";
pub const TEKST: &str = "Tekst";
pub const BUDGETKONTONUMMER: &str = "Budgetkontonummer";
pub const ADRESSEKONTO: &str = "Adressekonto";
pub const DEBIT: &str = "Debit";
pub const DEBIT_AS_TEXT: &str = "DebitAsText";

pub const BELOEB: &str = "Beløb";
pub const BELOEB_AS_TEXT: &str = "BeløbAsText";
pub const ADVARSEL: &str = "Advarsel";
pub const INFORMATION: &str = "Information";
pub const KONTOVAERDI: &str = "Kontoværdi";

pub const BOGFOERINGSLINJER: &str = "Bogføringslinjer";
pub const BOGFOERINGSADVARSLER: &str = "Bogføringsadvarsler";
pub const DEBITORER: &str = "Debitorer";
pub const KREDITORER: &str = "Kreditorer";
pub const NYHEDER: &str = "Nyheder";
pub const KONTI: &str = "Konti";
pub const BUDGETKONTI: &str = "Budgetkonti";
pub const KONTOGRUPPER: &str = "Kontogrupper";
pub const BUDGETKONTOGRUPPER: &str = "Budgetkontogrupper";
pub const OPGOERELSESLINJER: &str = "Opgørelseslinjer";
