use thiserror::Error;

const MAX_LOCAL_LEN: usize = 64;
const MAX_DOMAIN_LEN: usize = 255;
const MAX_LABEL_LEN: usize = 63;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmailFormatError {
    #[error("missing '@' separator")]
    MissingAtSign,
    #[error("more than one '@' separator")]
    MultipleAtSigns,
    #[error("empty local part")]
    EmptyLocalPart,
    #[error("local part longer than {MAX_LOCAL_LEN} characters")]
    LocalPartTooLong,
    #[error("local part starts or ends with a dot")]
    DotAtLocalEdge,
    #[error("consecutive dots in local part")]
    ConsecutiveDots,
    #[error("invalid character {0:?} in local part")]
    InvalidLocalChar(char),
    #[error("empty domain")]
    EmptyDomain,
    #[error("domain longer than {MAX_DOMAIN_LEN} characters")]
    DomainTooLong,
    #[error("domain must contain at least two labels")]
    MissingTopLevelLabel,
    #[error("empty domain label")]
    EmptyDomainLabel,
    #[error("domain label longer than {MAX_LABEL_LEN} characters")]
    LabelTooLong,
    #[error("domain label starts or ends with a hyphen")]
    HyphenAtLabelEdge,
    #[error("invalid character {0:?} in domain")]
    InvalidDomainChar(char),
}

/// Normalizes a raw email value: trim, lowercase, drop interior spaces,
/// then collapse `..` to `.`. The collapse runs once, left to right, and
/// is not repeated until stable: `...` becomes `..`.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase().replace(' ', "").replace("..", ".")
}

pub fn validate_email(value: &str) -> Result<(), EmailFormatError> {
    let Some((local, domain)) = value.split_once('@') else {
        return Err(EmailFormatError::MissingAtSign);
    };
    if domain.contains('@') {
        return Err(EmailFormatError::MultipleAtSigns);
    }
    validate_local_part(local)?;
    validate_domain(domain)
}

pub fn clean_email(raw: &str) -> Option<String> {
    let normalized = normalize_email(raw);
    match validate_email(&normalized) {
        Ok(()) => Some(normalized),
        Err(_) => None,
    }
}

fn validate_local_part(local: &str) -> Result<(), EmailFormatError> {
    if local.is_empty() {
        return Err(EmailFormatError::EmptyLocalPart);
    }
    if local.len() > MAX_LOCAL_LEN {
        return Err(EmailFormatError::LocalPartTooLong);
    }
    if local.starts_with('.') || local.ends_with('.') {
        return Err(EmailFormatError::DotAtLocalEdge);
    }
    if local.contains("..") {
        return Err(EmailFormatError::ConsecutiveDots);
    }
    for ch in local.chars() {
        if !is_atext(ch) && ch != '.' {
            return Err(EmailFormatError::InvalidLocalChar(ch));
        }
    }
    Ok(())
}

fn validate_domain(domain: &str) -> Result<(), EmailFormatError> {
    if domain.is_empty() {
        return Err(EmailFormatError::EmptyDomain);
    }
    if domain.len() > MAX_DOMAIN_LEN {
        return Err(EmailFormatError::DomainTooLong);
    }

    let mut labels = 0;
    for label in domain.split('.') {
        if label.is_empty() {
            return Err(EmailFormatError::EmptyDomainLabel);
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(EmailFormatError::LabelTooLong);
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(EmailFormatError::HyphenAtLabelEdge);
        }
        for ch in label.chars() {
            if !ch.is_ascii_alphanumeric() && ch != '-' {
                return Err(EmailFormatError::InvalidDomainChar(ch));
            }
        }
        labels += 1;
    }

    if labels < 2 {
        return Err(EmailFormatError::MissingTopLevelLabel);
    }

    Ok(())
}

fn is_atext(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || "!#$%&'*+/=?^_`{|}~-".contains(ch)
}
