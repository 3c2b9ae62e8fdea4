use crate::DnsRecord;

/// The three record groups of a DNS reply, in the order the server sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DnsResponse {
    answers: Vec<DnsRecord>,

    authority: Vec<DnsRecord>,

    additional: Vec<DnsRecord>,
}

impl DnsResponse {
    pub fn new(
        answers: Vec<DnsRecord>,
        authority: Vec<DnsRecord>,
        additional: Vec<DnsRecord>,
    ) -> Self {
        Self {
            answers,
            authority,
            additional,
        }
    }

    /// A reply with nothing in it. Also what a swallowed transport failure
    /// turns into.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn answers(&self) -> &[DnsRecord] {
        &self.answers
    }

    pub fn authority(&self) -> &[DnsRecord] {
        &self.authority
    }

    pub fn additional(&self) -> &[DnsRecord] {
        &self.additional
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty() && self.authority.is_empty() && self.additional.is_empty()
    }

    pub fn with_answer(mut self, record: DnsRecord) -> Self {
        self.answers.push(record);
        self
    }

    pub fn with_authority(mut self, record: DnsRecord) -> Self {
        self.authority.push(record);
        self
    }

    pub fn with_additional(mut self, record: DnsRecord) -> Self {
        self.additional.push(record);
        self
    }
}
