//! Таблица кодов типов BAI2.
//!
//! Сопоставляет трёхзначные коды типов из итогов по счёту и транзакций
//! с направлением, областью и описанием. Коды вне таблицы тоже
//! разрешаются, но без атрибутов: стандарт со временем пополняется,
//! а собственные коды банков (900-999) встречаются часто.

use serde::Serialize;

/// Направление движения средств для кода типа.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Поступление на счёт.
    Credit,
    /// Списание со счёта.
    Debit,
    /// Коды остатков и статусов.
    NotApplicable,
}

/// Уровень детализации кода типа.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// Статус счёта (остатки, float).
    Status,
    /// Итог по операциям.
    Summary,
    /// Отдельная транзакция.
    Detail,
}

/// Разрешённый код типа.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TypeCode {
    /// Числовой код.
    pub code: u16,
    /// Направление средств; `None` для кодов вне таблицы.
    pub transaction: Option<Direction>,
    /// Область отчётности; `None` для кодов вне таблицы.
    pub scope: Option<Scope>,
    /// Описание для человека; `None` для кодов вне таблицы.
    pub description: Option<&'static str>,
}

/// Разрешает числовой код типа.
///
/// ```
/// use bai2::type_code::{lookup, Direction, Scope};
///
/// let code = lookup(174);
/// assert_eq!(code.transaction, Some(Direction::Credit));
/// assert_eq!(code.scope, Some(Scope::Detail));
/// assert_eq!(code.description, Some("Other Deposit"));
///
/// assert_eq!(lookup(987).description, None);
/// ```
#[must_use]
pub fn lookup(code: u16) -> TypeCode {
    match TABLE.binary_search_by_key(&code, |&(c, ..)| c) {
        Ok(idx) => {
            let (code, direction, scope, description) = TABLE[idx];
            TypeCode {
                code,
                transaction: Some(direction),
                scope: Some(scope),
                description: Some(description),
            }
        }
        Err(_) => TypeCode { code, transaction: None, scope: None, description: None },
    }
}

const NA: Direction = Direction::NotApplicable;
const CR: Direction = Direction::Credit;
const DB: Direction = Direction::Debit;
const S: Scope = Scope::Status;
const SU: Scope = Scope::Summary;
const D: Scope = Scope::Detail;

// sorted by code
static TABLE: &[(u16, Direction, Scope, &str)] = &[
    (10, NA, S, "Opening Ledger"),
    (11, NA, S, "Average Opening Ledger MTD"),
    (12, NA, S, "Average Opening Ledger YTD"),
    (15, NA, S, "Closing Ledger"),
    (20, NA, S, "Average Closing Ledger MTD"),
    (21, NA, S, "Average Closing Ledger - Previous Month"),
    (22, NA, S, "Aggregate Balance Adjustments"),
    (24, NA, S, "Average Closing Ledger YTD - Previous Month"),
    (25, NA, S, "Average Closing Ledger YTD"),
    (30, NA, S, "Current Ledger"),
    (37, NA, S, "ACH Net Position"),
    (39, NA, S, "Opening Available + Total Same-Day ACH DTC Deposit"),
    (40, NA, S, "Opening Available"),
    (41, NA, S, "Average Opening Available MTD"),
    (42, NA, S, "Average Opening Available YTD"),
    (43, NA, S, "Average Available - Previous Month"),
    (44, NA, S, "Disbursing Opening Available Balance"),
    (45, NA, S, "Closing Available"),
    (50, NA, S, "Average Closing Available MTD"),
    (51, NA, S, "Average Closing Available - Last Month"),
    (54, NA, S, "Average Closing Available YTD - Last Month"),
    (55, NA, S, "Average Closing Available YTD"),
    (56, NA, S, "Loan Balance"),
    (57, NA, S, "Total Investment Position"),
    (59, NA, S, "Current Available (CRS Suppressed)"),
    (60, NA, S, "Current Available"),
    (61, NA, S, "Average Current Available MTD"),
    (62, NA, S, "Average Current Available YTD"),
    (63, NA, S, "Total Float"),
    (65, NA, S, "Target Balance"),
    (66, NA, S, "Adjusted Balance"),
    (67, NA, S, "Adjusted Balance MTD"),
    (68, NA, S, "Adjusted Balance YTD"),
    (70, NA, S, "0-Day Float"),
    (72, NA, S, "1-Day Float"),
    (73, NA, S, "Float Adjustment"),
    (74, NA, S, "2 or More Days Float"),
    (75, NA, S, "3 or More Days Float"),
    (76, NA, S, "Adjustment to Balances"),
    (77, NA, S, "Average Adjustment to Balances MTD"),
    (78, NA, S, "Average Adjustment to Balances YTD"),
    (79, NA, S, "4-Day Float"),
    (80, NA, S, "5-Day Float"),
    (81, NA, S, "6-Day Float"),
    (82, NA, S, "Average 1-Day Float MTD"),
    (83, NA, S, "Average 1-Day Float YTD"),
    (84, NA, S, "Average 2-Day Float MTD"),
    (85, NA, S, "Average 2-Day Float YTD"),
    (86, NA, S, "Transfer Calculation"),
    (100, CR, SU, "Total Credits"),
    (101, CR, SU, "Total Credit Amount MTD"),
    (105, CR, SU, "Credits Not Detailed"),
    (106, CR, SU, "Deposits Subject to Float"),
    (107, CR, SU, "Total Adjustment Credits YTD"),
    (108, CR, D, "Credit (Any Type)"),
    (109, CR, SU, "Current Day Total Lockbox Deposits"),
    (110, CR, SU, "Total Lockbox Deposits"),
    (115, CR, D, "Lockbox Deposit"),
    (116, CR, D, "Item in Lockbox Deposit"),
    (118, CR, D, "Lockbox Adjustment Credit"),
    (120, CR, SU, "EDI Transaction Credit"),
    (121, CR, D, "EDI Transaction Credit"),
    (122, CR, D, "EDIBANX Credit Received"),
    (123, CR, D, "EDIBANX Credit Return"),
    (130, CR, SU, "Total Concentration Credits"),
    (131, CR, SU, "Total DTC Credits"),
    (135, CR, D, "DTC Concentration Credit"),
    (136, CR, D, "Item in DTC Deposit"),
    (140, CR, SU, "Total ACH Credits"),
    (142, CR, D, "ACH Credit Received"),
    (143, CR, D, "Item in ACH Deposit"),
    (145, CR, D, "ACH Concentration Credit"),
    (146, CR, SU, "Total Bank Card Deposits"),
    (147, CR, D, "Individual Bank Card Deposit"),
    (150, CR, SU, "Total Preauthorized Payment Credits"),
    (155, CR, D, "Preauthorized Draft Credit"),
    (156, CR, D, "Item in PAC Deposit"),
    (160, CR, SU, "Total ACH Disbursing Funding Credits"),
    (162, CR, D, "Corporate Trade Payment Settlement"),
    (163, CR, D, "Corporate Trade Payment Credits"),
    (164, CR, D, "Corporate Trade Payment Credit"),
    (165, CR, D, "Preauthorized ACH Credit"),
    (166, CR, D, "ACH Settlement"),
    (167, CR, SU, "ACH Settlement Credits"),
    (168, CR, D, "ACH Return Item or Adjustment Settlement"),
    (169, CR, D, "Miscellaneous ACH Credit"),
    (170, CR, SU, "Total Other Check Deposits"),
    (171, CR, D, "Individual Loan Deposit"),
    (172, CR, D, "Deposit Correction"),
    (173, CR, D, "Bank-Prepared Deposit"),
    (174, CR, D, "Other Deposit"),
    (175, CR, D, "Check Deposit Package"),
    (176, CR, D, "Re-presented Check Deposit"),
    (178, CR, SU, "List Post Credits"),
    (180, CR, SU, "Total Loan Proceeds"),
    (182, CR, SU, "Total Bank-Prepared Deposits"),
    (184, CR, D, "Draft Deposit"),
    (185, CR, SU, "Total Miscellaneous Deposits"),
    (186, CR, D, "Cash Letter Credit"),
    (187, CR, SU, "Total Cash Letter Credits"),
    (188, CR, D, "Cash Letter Adjustment"),
    (189, CR, SU, "Total Cash Letter Adjustments"),
    (190, CR, SU, "Total Incoming Money Transfers"),
    (191, CR, D, "Individual Incoming Internal Money Transfer"),
    (195, CR, D, "Incoming Money Transfer"),
    (196, CR, D, "Money Transfer Adjustment"),
    (198, CR, D, "Compensation"),
    (200, CR, SU, "Total Automatic Transfer Credits"),
    (201, CR, D, "Individual Automatic Transfer Credit"),
    (202, CR, D, "Bond Operations Credit"),
    (205, CR, SU, "Total Book Transfer Credits"),
    (206, CR, D, "Book Transfer Credit"),
    (207, CR, SU, "Total International Money Transfer Credits"),
    (208, CR, D, "Individual International Money Transfer Credit"),
    (210, CR, SU, "Total International Credits"),
    (212, CR, D, "Foreign Letter of Credit"),
    (213, CR, D, "Letter of Credit"),
    (214, CR, D, "Foreign Exchange of Credit"),
    (215, CR, SU, "Total Letters of Credit"),
    (216, CR, D, "Foreign Remittance Credit"),
    (218, CR, D, "Foreign Collection Credit"),
    (221, CR, D, "Foreign Check Purchase"),
    (222, CR, D, "Foreign Checks Deposited"),
    (224, CR, D, "Commission"),
    (226, CR, D, "International Money Market Trading"),
    (227, CR, D, "Standing Order"),
    (229, CR, D, "Miscellaneous International Credit"),
    (230, CR, SU, "Total Security Credits"),
    (231, CR, SU, "Total Collection Credits"),
    (232, CR, D, "Sale of Debt Security"),
    (233, CR, D, "Securities Sold"),
    (234, CR, D, "Sale of Equity Security"),
    (235, CR, D, "Matured Reverse Repurchase Order"),
    (236, CR, D, "Maturity of Debt Security"),
    (237, CR, D, "Individual Collection Credit"),
    (238, CR, D, "Collection of Dividends"),
    (239, CR, SU, "Total Bankers' Acceptance Credits"),
    (240, CR, D, "Coupon Collections - Banks"),
    (241, CR, D, "Bankers' Acceptances"),
    (242, CR, D, "Collection of Interest Income"),
    (243, CR, D, "Matured Fed Funds Purchased"),
    (244, CR, D, "Interest/Matured Principal Payment"),
    (245, CR, SU, "Monthly Dividends"),
    (246, CR, D, "Commercial Paper"),
    (247, CR, D, "Capital Change"),
    (248, CR, D, "Savings Bonds Sales Adjustment"),
    (249, CR, D, "Miscellaneous Security Credit"),
    (250, CR, SU, "Total Checks Posted and Returned"),
    (251, CR, SU, "Total Debit Reversals"),
    (252, CR, D, "Debit Reversal"),
    (254, CR, D, "Posting Error Correction Credit"),
    (255, CR, D, "Check Posted and Returned"),
    (256, CR, SU, "Total ACH Return Items"),
    (257, CR, D, "Individual ACH Return Item"),
    (258, CR, D, "ACH Reversal Credit"),
    (260, CR, SU, "Total Rejected Credits"),
    (261, CR, D, "Individual Rejected Credit"),
    (263, CR, D, "Overdraft"),
    (266, CR, D, "Return Item"),
    (268, CR, D, "Return Item Adjustment"),
    (270, CR, SU, "Total ZBA Credits"),
    (271, CR, SU, "Net Zero-Balance Amount"),
    (274, CR, D, "Cumulative ZBA or Disbursement Credits"),
    (275, CR, D, "ZBA Credit"),
    (276, CR, D, "ZBA Float Adjustment"),
    (277, CR, D, "ZBA Credit Transfer"),
    (278, CR, D, "ZBA Credit Adjustment"),
    (280, CR, SU, "Total Controlled Disbursing Credits"),
    (281, CR, D, "Individual Controlled Disbursing Credit"),
    (285, CR, SU, "Total DTC Disbursing Credits"),
    (286, CR, D, "Individual DTC Disbursing Credit"),
    (294, CR, SU, "Total ATM Credits"),
    (295, CR, D, "ATM Credit"),
    (301, CR, D, "Commercial Deposit"),
    (302, CR, SU, "Correspondent Bank Deposit"),
    (303, CR, SU, "Total Wire Transfers In - FF"),
    (304, CR, SU, "Total Wire Transfers In - CHF"),
    (305, CR, SU, "Total Fed Funds Sold"),
    (306, CR, D, "Fed Funds Sold"),
    (307, CR, SU, "Total Trust Credits"),
    (308, CR, D, "Trust Credit"),
    (309, CR, SU, "Total Value-Dated Funds"),
    (310, CR, SU, "Total Commercial Deposits"),
    (315, CR, SU, "Total International Credits - FF"),
    (316, CR, SU, "Total International Credits - CHF"),
    (318, CR, SU, "Total Foreign Check Purchased"),
    (319, CR, SU, "Late Deposit"),
    (320, CR, SU, "Total Securities Sold - FF"),
    (321, CR, SU, "Total Securities Sold - CHF"),
    (324, CR, SU, "Total Securities Matured - FF"),
    (325, CR, SU, "Total Securities Matured - CHF"),
    (326, CR, SU, "Total Securities Interest"),
    (327, CR, SU, "Total Securities Matured"),
    (328, CR, SU, "Total Securities Interest - FF"),
    (329, CR, SU, "Total Securities Interest - CHF"),
    (330, CR, SU, "Total Escrow Credits"),
    (331, CR, D, "Individual Escrow Credit"),
    (332, CR, SU, "Total Miscellaneous Securities Credits - FF"),
    (336, CR, SU, "Total Miscellaneous Securities Credits - CHF"),
    (338, CR, SU, "Total Securities Sold"),
    (340, CR, SU, "Total Broker Deposits"),
    (341, CR, SU, "Total Broker Deposits - FF"),
    (342, CR, D, "Broker Deposit"),
    (343, CR, SU, "Total Broker Deposits - CHF"),
    (344, CR, D, "Individual Back Value Credit"),
    (345, CR, D, "Item in Brokers Deposit"),
    (346, CR, D, "Sweep Interest Income"),
    (347, CR, D, "Sweep Principal Sell"),
    (348, CR, D, "Futures Credit"),
    (349, CR, D, "Principal Payments Credit"),
    (350, CR, SU, "Investment Sold"),
    (351, CR, D, "Individual Investment Sold"),
    (352, CR, SU, "Total Cash Center Credits"),
    (353, CR, D, "Cash Center Credit"),
    (354, CR, D, "Interest Credit"),
    (355, CR, SU, "Investment Interest"),
    (356, CR, SU, "Total Credit Adjustment"),
    (357, CR, D, "Credit Adjustment"),
    (358, CR, D, "YTD Adjustment Credit"),
    (359, CR, D, "Interest Adjustment Credit"),
    (360, CR, SU, "Total Credits Less Wire Transfer and Returned Checks"),
    (361, CR, SU, "Grand Total Credits Less Grand Total Debits"),
    (362, CR, D, "Correspondent Collection"),
    (363, CR, D, "Correspondent Collection Adjustment"),
    (364, CR, D, "Loan Participation"),
    (366, CR, D, "Currency and Coin Deposited"),
    (367, CR, D, "Food Stamp Letter"),
    (368, CR, D, "Food Stamp Adjustment"),
    (369, CR, D, "Clearing Settlement Credit"),
    (370, CR, SU, "Total Back Value Credits"),
    (372, CR, D, "Back Value Adjustment"),
    (373, CR, D, "Customer Payroll"),
    (374, CR, D, "FRB Statement Recap"),
    (376, CR, D, "Savings Bond Letter or Adjustment"),
    (377, CR, D, "Treasury Tax and Loan Credit"),
    (378, CR, D, "Transfer of Treasury Credit"),
    (379, CR, D, "FRB Government Checks Cash Letter Credit"),
    (381, CR, D, "FRB Government Check Adjustment"),
    (382, CR, D, "FRB Postal Money Order Credit"),
    (383, CR, D, "FRB Postal Money Order Adjustment"),
    (384, CR, D, "FRB Cash Letter Auto Charge Credit"),
    (385, CR, SU, "Total Universal Credits"),
    (386, CR, D, "FRB Cash Letter Auto Charge Adjustment"),
    (387, CR, D, "FRB Fine-Sort Cash Letter Credit"),
    (388, CR, D, "FRB Fine-Sort Adjustment"),
    (389, CR, SU, "Total Freight Payment Credits"),
    (390, CR, SU, "Total Miscellaneous Credits"),
    (391, CR, D, "Universal Credit"),
    (392, CR, D, "Freight Payment Credit"),
    (393, CR, D, "Itemized Credit Over $10,000"),
    (394, CR, D, "Cumulative Credits"),
    (395, CR, D, "Check Reversal"),
    (397, CR, D, "Float Adjustment"),
    (398, CR, D, "Miscellaneous Fee Refund"),
    (399, CR, D, "Miscellaneous Credit"),
    (400, DB, SU, "Total Debits"),
    (401, DB, SU, "Total Debit Amount MTD"),
    (403, DB, SU, "Today's Total Debits"),
    (405, DB, SU, "Total Debit Less Wire Transfers and Charge-Backs"),
    (406, DB, SU, "Debits not Detailed"),
    (408, DB, D, "Float Adjustment"),
    (409, DB, D, "Debit (Any Type)"),
    (410, DB, SU, "Total YTD Adjustment"),
    (412, DB, SU, "Total Debits (Excluding Returned Items)"),
    (415, DB, D, "Lockbox Debit"),
    (416, DB, SU, "Total Lockbox Debits"),
    (420, DB, SU, "EDI Transaction Debits"),
    (421, DB, D, "EDI Transaction Debit"),
    (422, DB, D, "EDIBANX Settlement Debit"),
    (423, DB, D, "EDIBANX Return Item Debit"),
    (430, DB, SU, "Total Payable-Through Drafts"),
    (435, DB, D, "Payable-Through Draft"),
    (445, DB, D, "ACH Concentration Debit"),
    (446, DB, SU, "Total ACH Disbursement Funding Debits"),
    (447, DB, D, "ACH Disbursement Funding Debit"),
    (450, DB, SU, "Total ACH Debits"),
    (451, DB, D, "ACH Debit Received"),
    (452, DB, D, "Item in ACH Disbursement or Debit"),
    (455, DB, D, "Preauthorized ACH Debit"),
    (462, DB, D, "Account Holder Initiated ACH Debit"),
    (463, DB, SU, "Corporate Trade Payment Debits"),
    (464, DB, D, "Corporate Trade Payment Debit"),
    (465, DB, D, "Corporate Trade Payment Settlement"),
    (466, DB, D, "ACH Settlement"),
    (467, DB, SU, "ACH Settlement Debits"),
    (468, DB, D, "ACH Return Item or Adjustment Settlement"),
    (469, DB, D, "Miscellaneous ACH Debit"),
    (470, DB, SU, "Total Check Paid"),
    (471, DB, SU, "Total Check Paid - Cumulative MTD"),
    (472, DB, D, "Cumulative Checks Paid"),
    (474, DB, D, "Certified Check Debit"),
    (475, DB, D, "Check Paid"),
    (476, DB, D, "Federal Reserve Bank Letter Debit"),
    (477, DB, D, "Bank Originated Debit"),
    (478, DB, SU, "List Post Debits"),
    (479, DB, D, "List Post Debit"),
    (480, DB, SU, "Total Loan Payments"),
    (481, DB, D, "Individual Loan Payment"),
    (482, DB, SU, "Total Bank-Originated Debits"),
    (484, DB, D, "Draft"),
    (485, DB, D, "DTC Debit"),
    (486, DB, SU, "Total Cash Letter Debits"),
    (487, DB, D, "Cash Letter Debit"),
    (489, DB, D, "Cash Letter Adjustment"),
    (490, DB, SU, "Total Outgoing Money Transfers"),
    (491, DB, D, "Individual Outgoing Internal Money Transfer"),
    (493, DB, D, "Customer Terminal Initiated Money Transfer"),
    (495, DB, D, "Outgoing Money Transfer"),
    (496, DB, D, "Money Transfer Adjustment"),
    (498, DB, D, "Compensation"),
    (500, DB, SU, "Total Automatic Transfer Debits"),
    (501, DB, D, "Individual Automatic Transfer Debit"),
    (502, DB, D, "Bond Operations Debit"),
    (505, DB, SU, "Total Book Transfer Debits"),
    (506, DB, D, "Book Transfer Debit"),
    (507, DB, SU, "Total International Money Transfer Debits"),
    (508, DB, D, "Individual International Money Transfer Debits"),
    (510, DB, SU, "Total International Debits"),
    (512, DB, D, "Letter of Credit Debit"),
    (513, DB, D, "Letter of Credit"),
    (514, DB, D, "Foreign Exchange Debit"),
    (515, DB, SU, "Total Letters of Credit"),
    (516, DB, D, "Foreign Remittance Debit"),
    (518, DB, D, "Foreign Collection Debit"),
    (522, DB, D, "Foreign Checks Paid"),
    (524, DB, D, "Commission"),
    (526, DB, D, "International Money Market Trading"),
    (527, DB, D, "Standing Order"),
    (529, DB, D, "Miscellaneous International Debit"),
    (530, DB, SU, "Total Security Debits"),
    (531, DB, D, "Securities Purchased"),
    (532, DB, SU, "Total Amount of Securities Purchased"),
    (533, DB, D, "Security Collection Debit"),
    (534, DB, SU, "Total Miscellaneous Securities DB - FF"),
    (535, DB, D, "Purchase of Equity Securities"),
    (536, DB, SU, "Total Miscellaneous Securities Debit - CHF"),
    (537, DB, SU, "Total Collection Debit"),
    (538, DB, D, "Matured Repurchase Order"),
    (539, DB, SU, "Total Bankers' Acceptances Debit"),
    (540, DB, D, "Coupon Collection Debit"),
    (541, DB, D, "Bankers' Acceptances"),
    (542, DB, D, "Purchase of Debt Securities"),
    (543, DB, D, "Domestic Collection"),
    (544, DB, D, "Interest/Matured Principal Payment"),
    (546, DB, D, "Commercial Paper"),
    (547, DB, D, "Capital Change"),
    (548, DB, D, "Savings Bonds Sales Adjustment"),
    (549, DB, D, "Miscellaneous Security Debit"),
    (550, DB, SU, "Total Checks Posted and Returned"),
    (551, DB, SU, "Total Credit Reversals"),
    (552, DB, D, "Credit Reversal"),
    (554, DB, D, "Posting Error Correction Debit"),
    (555, DB, D, "Deposited Item Returned"),
    (556, DB, SU, "Total ACH Return Items"),
    (557, DB, D, "Individual ACH Return Item"),
    (558, DB, D, "ACH Reversal Debit"),
    (560, DB, SU, "Total Rejected Debits"),
    (561, DB, D, "Individual Rejected Debit"),
    (563, DB, D, "Overdraft"),
    (564, DB, D, "Overdraft Fee"),
    (566, DB, D, "Return Item"),
    (567, DB, D, "Return Item Fee"),
    (568, DB, D, "Return Item Adjustment"),
    (570, DB, SU, "Total ZBA Debits"),
    (574, DB, D, "Cumulative ZBA Debits"),
    (575, DB, D, "ZBA Debit"),
    (577, DB, D, "ZBA Debit Transfer"),
    (578, DB, D, "ZBA Debit Adjustment"),
    (580, DB, SU, "Total Controlled Disbursing Debits"),
    (581, DB, D, "Individual Controlled Disbursing Debit"),
    (583, DB, SU, "Total Disbursing Checks Paid - Early Amount"),
    (584, DB, SU, "Total Disbursing Checks Paid - Later Amount"),
    (585, DB, SU, "Disbursing Funding Requirement"),
    (586, DB, SU, "FRB Presentment Estimate (Fed Estimate)"),
    (587, DB, SU, "Late Debits (After Notification)"),
    (588, DB, SU, "Total Disbursing Checks Paid - Last Amount"),
    (590, DB, SU, "Total DTC Debits"),
    (594, DB, SU, "Total ATM Debits"),
    (595, DB, D, "ATM Debit"),
    (596, DB, SU, "Total ARP Debits"),
    (597, DB, D, "ARP Debit"),
    (601, DB, SU, "Estimated Total Disbursement"),
    (602, DB, SU, "Adjusted Total Disbursement"),
    (610, DB, SU, "Total Funds Required"),
    (611, DB, SU, "Total Wire Transfers Out - CHF"),
    (612, DB, SU, "Total Wire Transfers Out - FF"),
    (613, DB, SU, "Total International Debit - CHF"),
    (614, DB, SU, "Total International Debit - FF"),
    (615, DB, SU, "Total Federal Reserve Bank - Commercial Bank Debit"),
    (616, DB, D, "Federal Reserve Bank - Commercial Bank Debit"),
    (617, DB, SU, "Total Securities Purchased - CHF"),
    (618, DB, SU, "Total Securities Purchased - FF"),
    (621, DB, SU, "Total Broker Debits - CHF"),
    (622, DB, D, "Broker Debit"),
    (623, DB, SU, "Total Broker Debits - FF"),
    (625, DB, SU, "Total Broker Debits"),
    (626, DB, SU, "Total Fed Funds Purchased"),
    (627, DB, D, "Fed Funds Purchased"),
    (628, DB, SU, "Total Cash Center Debits"),
    (629, DB, D, "Cash Center Debit"),
    (630, DB, SU, "Total Debit Adjustments"),
    (631, DB, D, "Debit Adjustment"),
    (632, DB, SU, "Total Trust Debits"),
    (633, DB, D, "Trust Debit"),
    (634, DB, D, "YTD Adjustment Debit"),
    (640, DB, SU, "Total Escrow Debits"),
    (641, DB, D, "Individual Escrow Debit"),
    (644, DB, D, "Individual Back Value Debit"),
    (646, DB, D, "Transfer Calculation Debit"),
    (650, DB, SU, "Investments Purchased"),
    (651, DB, D, "Individual Investment Purchased"),
    (654, DB, D, "Interest Debit"),
    (655, DB, SU, "Total Investment Interest Debits"),
    (656, DB, D, "Sweep Principal Buy"),
    (657, DB, D, "Futures Debit"),
    (658, DB, D, "Principal Payments Debit"),
    (659, DB, D, "Interest Adjustment Debit"),
    (661, DB, D, "Account Analysis Fee"),
    (662, DB, D, "Correspondent Collection Debit"),
    (663, DB, D, "Correspondent Collection Adjustment"),
    (664, DB, D, "Loan Participation"),
    (665, DB, SU, "Intercept Debits"),
    (666, DB, D, "Currency and Coin Shipped"),
    (667, DB, D, "Food Stamp Letter"),
    (668, DB, D, "Food Stamp Adjustment"),
    (669, DB, D, "Clearing Settlement Debit"),
    (670, DB, SU, "Total Back Value Debits"),
    (672, DB, D, "Back Value Adjustment"),
    (673, DB, D, "Customer Payroll"),
    (674, DB, D, "FRB Statement Recap"),
    (676, DB, D, "Savings Bond Letter or Adjustment"),
    (677, DB, D, "Treasury Tax and Loan Debit"),
    (678, DB, D, "Transfer of Treasury Debit"),
    (679, DB, D, "FRB Government Checks Cash Letter Debit"),
    (681, DB, D, "FRB Government Check Adjustment"),
    (682, DB, D, "FRB Postal Money Order Debit"),
    (683, DB, D, "FRB Postal Money Order Adjustment"),
    (684, DB, D, "FRB Cash Letter Auto Charge Debit"),
    (685, DB, SU, "Total Universal Debits"),
    (686, DB, D, "FRB Cash Letter Auto Charge Adjustment"),
    (687, DB, D, "FRB Fine-Sort Cash Letter Debit"),
    (688, DB, D, "FRB Fine-Sort Adjustment"),
    (689, DB, SU, "FRB Freight Payment Debits"),
    (690, DB, SU, "Total Miscellaneous Debits"),
    (691, DB, D, "Universal Debit"),
    (692, DB, D, "Freight Payment Debit"),
    (693, DB, D, "Itemized Debit Over $10,000"),
    (694, DB, D, "Deposit Reversal"),
    (695, DB, D, "Deposit Correction Debit"),
    (696, DB, D, "Regular Collection Debit"),
    (697, DB, D, "Cumulative Debits"),
    (698, DB, D, "Miscellaneous Fees"),
    (699, DB, D, "Miscellaneous Debit"),
    (701, NA, S, "Principal Loan Balance"),
    (703, NA, S, "Available Commitment Amount"),
    (705, NA, S, "Payment Amount Due"),
    (707, NA, S, "Principal Amount Past Due"),
    (709, NA, S, "Interest Amount Past Due"),
    (720, CR, SU, "Total Loan Payment"),
    (721, CR, D, "Amount Applied to Interest"),
    (722, CR, D, "Amount Applied to Principal"),
    (723, CR, D, "Amount Applied to Escrow"),
    (724, CR, D, "Amount Applied to Late Charges"),
    (725, CR, D, "Amount Applied to Buydown"),
    (726, CR, D, "Amount Applied to Misc. Fees"),
    (727, CR, D, "Amount Applied to Deferred Interest Detail"),
    (728, CR, D, "Amount Applied to Service Charge"),
    (760, DB, SU, "Loan Disbursement"),
    (890, NA, D, "Contains Non-monetary Information"),
];
