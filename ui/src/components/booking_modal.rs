//! The booking modal and the reducer that drives it.
//!
//! All transitions go through `BookingFlow`. Side effects (fetching
//! availability, sending the booking, raising toasts) are passed into the
//! reducer as callbacks and fire only when the transition they belong to
//! actually happens, so a result for an old session is dropped in one place.

use std::rc::Rc;

use jiff::civil::Date;
use payloads::booking_flow::{
    AVAILABILITY_FAILED, BOOKING_CONFIRMED, BOOKING_FAILED, BookingFlow,
    BookingPhase, CalendarState,
};
use payloads::calendar::CalendarDay;
use payloads::requests::CreateBooking;
use payloads::{Availability, Venue, VenueId};
use uuid::Uuid;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::{AvailabilityCalendar, Modal};
use crate::contexts::toast::use_toast;
use crate::utils::format;
use crate::{State, get_api_client};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookingFlowState {
    pub flow: BookingFlow,
}

pub enum BookingAction {
    Open {
        venue_id: VenueId,
        fetch: Callback<(VenueId, Uuid)>,
    },
    Close,
    AvailabilityLoaded {
        token: Uuid,
        today: Date,
        availability: Availability,
    },
    AvailabilityFailed {
        token: Uuid,
        message: String,
    },
    SelectDay {
        day: CalendarDay,
        on_error: Callback<String>,
    },
    SetName(String),
    SetEmail(String),
    Submit {
        send: Callback<(Uuid, CreateBooking)>,
        on_error: Callback<String>,
    },
    Submitted {
        token: Uuid,
        on_done: Callback<()>,
    },
    SubmitFailed {
        token: Uuid,
        on_failed: Callback<()>,
    },
}

impl Reducible for BookingFlowState {
    type Action = BookingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut flow = self.flow.clone();
        match action {
            BookingAction::Open { venue_id, fetch } => {
                let token = flow.open(venue_id);
                fetch.emit((venue_id, token));
            }
            BookingAction::Close => flow.close(),
            BookingAction::AvailabilityLoaded {
                token,
                today,
                availability,
            } => {
                if !flow.availability_loaded(token, today, &availability) {
                    tracing::debug!("dropped stale availability for {token}");
                }
            }
            BookingAction::AvailabilityFailed { token, message } => {
                flow.availability_failed(token, message);
            }
            BookingAction::SelectDay { day, on_error } => {
                if let Err(e) = flow.select_day(&day) {
                    on_error.emit(e.to_string());
                }
            }
            BookingAction::SetName(name) => flow.set_user_name(name),
            BookingAction::SetEmail(email) => flow.set_user_email(email),
            BookingAction::Submit { send, on_error } => {
                match flow.begin_submit() {
                    Ok(request) => send.emit(request),
                    Err(e) => on_error.emit(e.to_string()),
                }
            }
            BookingAction::Submitted { token, on_done } => {
                if flow.submit_succeeded(token) {
                    on_done.emit(());
                }
            }
            BookingAction::SubmitFailed { token, on_failed } => {
                if flow.submit_failed(token) {
                    on_failed.emit(());
                }
            }
        }
        Rc::new(Self { flow })
    }
}

pub type BookingFlowHandle = UseReducerHandle<BookingFlowState>;

/// Open the modal for a venue and load its availability.
pub fn open_booking(handle: &BookingFlowHandle, venue_id: VenueId) {
    let dispatcher = handle.dispatcher();
    let fetch = Callback::from(move |(venue_id, token): (VenueId, Uuid)| {
        let dispatcher = dispatcher.clone();
        yew::platform::spawn_local(async move {
            match get_api_client().get_availability(&venue_id).await {
                Ok(availability) => {
                    dispatcher.dispatch(BookingAction::AvailabilityLoaded {
                        token,
                        today: jiff::Zoned::now().date(),
                        availability,
                    });
                }
                Err(e) => {
                    tracing::warn!("availability for venue {venue_id}: {e}");
                    dispatcher.dispatch(BookingAction::AvailabilityFailed {
                        token,
                        message: AVAILABILITY_FAILED.to_string(),
                    });
                }
            }
        });
    });
    handle.dispatch(BookingAction::Open { venue_id, fetch });
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub flow: BookingFlowHandle,
    /// The venue the open session is for, once known.
    pub venue: Option<Venue>,
}

#[function_component]
pub fn BookingModal(props: &Props) -> Html {
    let toast = use_toast();
    let (_, dispatch) = use_store::<State>();

    let Some(session) = props.flow.flow.session() else {
        return html! {};
    };
    let phase = props.flow.flow.phase();
    let submitting = phase == BookingPhase::Submitting;

    let on_close = {
        let flow = props.flow.clone();
        Callback::from(move |_: ()| flow.dispatch(BookingAction::Close))
    };

    let on_select = {
        let flow = props.flow.clone();
        let toast = toast.clone();
        Callback::from(move |day: CalendarDay| {
            let toast = toast.clone();
            flow.dispatch(BookingAction::SelectDay {
                day,
                on_error: Callback::from(move |message: String| {
                    toast.error(message)
                }),
            });
        })
    };

    let on_name = {
        let flow = props.flow.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            flow.dispatch(BookingAction::SetName(input.value()));
        })
    };

    let on_email = {
        let flow = props.flow.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            flow.dispatch(BookingAction::SetEmail(input.value()));
        })
    };

    let on_submit = {
        let dispatcher = props.flow.dispatcher();
        let toast = toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let send = {
                let dispatcher = dispatcher.clone();
                let toast = toast.clone();
                let dispatch = dispatch.clone();
                Callback::from(move |(token, request): (Uuid, CreateBooking)| {
                    let dispatcher = dispatcher.clone();
                    let toast = toast.clone();
                    let dispatch = dispatch.clone();
                    yew::platform::spawn_local(async move {
                        let result =
                            get_api_client().create_booking(&request).await;
                        match result {
                            Ok(booking) => {
                                tracing::info!("booked {booking:?}");
                                dispatcher.dispatch(BookingAction::Submitted {
                                    token,
                                    on_done: Callback::from(move |_| {
                                        toast.success(BOOKING_CONFIRMED);
                                        dispatch.reduce_mut(|s| s.data_changed());
                                    }),
                                });
                            }
                            Err(e) => {
                                dispatcher.dispatch(
                                    BookingAction::SubmitFailed {
                                        token,
                                        on_failed: Callback::from(move |_| {
                                            toast.api_error(&e, BOOKING_FAILED)
                                        }),
                                    },
                                );
                            }
                        }
                    });
                })
            };

            let on_error = {
                let toast = toast.clone();
                Callback::from(move |message: String| toast.error(message))
            };

            dispatcher.dispatch(BookingAction::Submit { send, on_error });
        })
    };

    let title = match &props.venue {
        Some(venue) => format!("Book {}", venue.name),
        None => "Book Venue".to_string(),
    };

    let calendar = match &session.calendar {
        CalendarState::Loading => html! {
            <p class="text-sm text-neutral-500 py-8 text-center">
                {"Loading availability..."}
            </p>
        },
        CalendarState::Failed(message) => html! {
            <p class="text-sm text-red-600 py-8 text-center">{message}</p>
        },
        CalendarState::Loaded(days) => html! {
            <AvailabilityCalendar
                days={days.clone()}
                selected={session.selected_date}
                on_select={on_select}
                disabled={submitting}
            />
        },
    };

    let selected = match session.selected_date {
        Some(date) => format!("Selected date: {}", format::short_date(date)),
        None => "Select an available date".to_string(),
    };

    html! {
        <Modal title={title} on_close={on_close.clone()} max_width="max-w-lg">
            <div class="space-y-4">
                if let Some(venue) = &props.venue {
                    <p class="text-sm text-neutral-600">
                        {format!(
                            "{} · {} people · {}/day",
                            venue.location,
                            venue.capacity,
                            format::money(venue.price_per_day)
                        )}
                    </p>
                }
                {calendar}
                <p class="text-sm font-medium text-neutral-800">{selected}</p>
                <form onsubmit={on_submit} class="space-y-3">
                    <input
                        type="text"
                        placeholder="Your name"
                        value={session.user_name.clone()}
                        oninput={on_name}
                        disabled={submitting}
                        class="w-full px-3 py-2 text-sm border border-neutral-300 rounded-md"
                    />
                    <input
                        type="email"
                        placeholder="Your email"
                        value={session.user_email.clone()}
                        oninput={on_email}
                        disabled={submitting}
                        class="w-full px-3 py-2 text-sm border border-neutral-300 rounded-md"
                    />
                    <div class="flex justify-end gap-3">
                        <button
                            type="button"
                            onclick={on_close.reform(|_: MouseEvent| ())}
                            class="px-4 py-2 text-sm font-medium text-neutral-700 bg-white border border-neutral-300 rounded-md hover:bg-neutral-50"
                        >
                            {"Cancel"}
                        </button>
                        <button
                            type="submit"
                            disabled={submitting}
                            class="px-4 py-2 text-sm font-medium text-white bg-neutral-900 hover:bg-neutral-700 rounded-md disabled:opacity-50"
                        >
                            {if submitting { "Booking..." } else { "Confirm Booking" }}
                        </button>
                    </div>
                </form>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use jiff::civil::date;

    type Log<T> = Rc<RefCell<Vec<T>>>;

    fn recorder<T: 'static>() -> (Log<T>, Callback<T>) {
        let log: Log<T> = Rc::default();
        let callback = {
            let log = log.clone();
            Callback::from(move |value: T| log.borrow_mut().push(value))
        };
        (log, callback)
    }

    const HALL: VenueId = VenueId(2);

    fn today() -> Date {
        date(2024, 6, 1)
    }

    fn availability() -> Availability {
        Availability {
            venue_id: HALL,
            available_dates: vec![],
            booked_dates: vec![date(2024, 6, 3)],
            blocked_dates: vec![],
        }
    }

    fn open(state: Rc<BookingFlowState>) -> (Rc<BookingFlowState>, Uuid) {
        let (fetches, fetch) = recorder();
        let state = state.reduce(BookingAction::Open {
            venue_id: HALL,
            fetch,
        });
        let token = fetches.borrow()[0].1;
        (state, token)
    }

    fn loaded() -> (Rc<BookingFlowState>, Uuid) {
        let (state, token) = open(Rc::default());
        let state = state.reduce(BookingAction::AvailabilityLoaded {
            token,
            today: today(),
            availability: availability(),
        });
        (state, token)
    }

    fn day(state: &BookingFlowState, offset: usize) -> CalendarDay {
        match &state.flow.session().unwrap().calendar {
            CalendarState::Loaded(days) => days[offset],
            other => panic!("calendar not loaded: {other:?}"),
        }
    }

    /// Loaded, first day picked, both fields filled, submit dispatched.
    fn submitting() -> (Rc<BookingFlowState>, Uuid) {
        let (state, token) = loaded();
        let (errors, on_error) = recorder();
        let first = day(&state, 0);
        let state = state
            .reduce(BookingAction::SelectDay {
                day: first,
                on_error: on_error.clone(),
            })
            .reduce(BookingAction::SetName("Alice".into()))
            .reduce(BookingAction::SetEmail("alice@example.com".into()));
        let (sent, send) = recorder();
        let state = state.reduce(BookingAction::Submit { send, on_error });
        assert!(errors.borrow().is_empty());
        assert_eq!(sent.borrow().len(), 1);
        (state, token)
    }

    #[test]
    fn open_fetches_once_with_the_session_token() {
        let (fetches, fetch) = recorder();
        let state = Rc::new(BookingFlowState::default())
            .reduce(BookingAction::Open {
                venue_id: HALL,
                fetch,
            })
            .reduce(BookingAction::SetName("Alice".into()))
            .reduce(BookingAction::Close);

        let session_token = {
            let (fetches_again, fetch) = recorder();
            let state = state.reduce(BookingAction::Open {
                venue_id: HALL,
                fetch,
            });
            assert_eq!(fetches_again.borrow().len(), 1);
            state.flow.session().unwrap().token
        };

        let fetches = fetches.borrow();
        assert_eq!(fetches.len(), 1);
        assert_eq!(fetches[0].0, HALL);
        // Reopening starts a new session with a new token.
        assert_ne!(fetches[0].1, session_token);
    }

    #[test]
    fn stale_availability_is_ignored() {
        let (state, first) = open(Rc::default());
        let (state, second) = open(state);

        let state = state.reduce(BookingAction::AvailabilityLoaded {
            token: first,
            today: today(),
            availability: availability(),
        });
        assert_eq!(
            state.flow.session().unwrap().calendar,
            CalendarState::Loading
        );

        let state = state.reduce(BookingAction::AvailabilityFailed {
            token: second,
            message: AVAILABILITY_FAILED.into(),
        });
        assert_eq!(
            state.flow.session().unwrap().calendar,
            CalendarState::Failed(AVAILABILITY_FAILED.into())
        );
    }

    #[test]
    fn unavailable_day_reports_and_selects_nothing() {
        let (state, _) = loaded();
        let (errors, on_error) = recorder();
        let booked = day(&state, 2);
        let state = state.reduce(BookingAction::SelectDay {
            day: booked,
            on_error,
        });

        assert_eq!(*errors.borrow(), vec!["Date is booked".to_string()]);
        assert_eq!(state.flow.phase(), BookingPhase::NoDate);
    }

    #[test]
    fn incomplete_form_is_not_sent() {
        let (state, _) = loaded();
        let (errors, on_error) = recorder();
        let (sent, send) = recorder();
        let first = day(&state, 0);
        let state = state
            .reduce(BookingAction::SelectDay {
                day: first,
                on_error: on_error.clone(),
            })
            .reduce(BookingAction::SetName("Alice".into()))
            .reduce(BookingAction::Submit { send, on_error });

        assert!(sent.borrow().is_empty());
        assert_eq!(*errors.borrow(), vec!["Please fill all fields".to_string()]);
        assert_eq!(state.flow.phase(), BookingPhase::DateSelected);
    }

    #[test]
    fn submit_sends_once() {
        let (state, token) = submitting();
        assert_eq!(state.flow.phase(), BookingPhase::Submitting);

        let (errors, on_error) = recorder();
        let (sent, send) = recorder();
        let state = state.reduce(BookingAction::Submit { send, on_error });

        assert!(sent.borrow().is_empty());
        assert_eq!(
            *errors.borrow(),
            vec!["Booking is already being submitted".to_string()]
        );
        assert_eq!(state.flow.session().unwrap().token, token);
    }

    #[test]
    fn sent_request_carries_the_form() {
        let (state, _) = loaded();
        let (_, on_error) = recorder();
        let (sent, send) = recorder();
        let first = day(&state, 0);
        let state = state
            .reduce(BookingAction::SelectDay {
                day: first,
                on_error: on_error.clone(),
            })
            .reduce(BookingAction::SetName(" Alice ".into()))
            .reduce(BookingAction::SetEmail("alice@example.com".into()))
            .reduce(BookingAction::Submit { send, on_error });

        let (token, request) = sent.borrow()[0].clone();
        assert_eq!(token, state.flow.session().unwrap().token);
        assert_eq!(
            request,
            CreateBooking {
                venue_id: HALL,
                booking_date: today(),
                user_name: "Alice".into(),
                user_email: "alice@example.com".into(),
            }
        );
    }

    #[test]
    fn stale_submitted_fires_nothing() {
        let (state, old) = submitting();
        let (state, _) = open(state);

        let (done, on_done) = recorder();
        let state = state.reduce(BookingAction::Submitted {
            token: old,
            on_done: on_done.clone(),
        });
        assert!(done.borrow().is_empty());
        assert_eq!(state.flow.phase(), BookingPhase::NoDate);

        // Nor after the modal was cancelled.
        let state = state
            .reduce(BookingAction::Close)
            .reduce(BookingAction::Submitted { token: old, on_done });
        assert!(done.borrow().is_empty());
        assert_eq!(state.flow.phase(), BookingPhase::Closed);
    }

    #[test]
    fn submitted_for_live_session_closes_once() {
        let (state, token) = submitting();

        let (done, on_done) = recorder();
        let state = state.reduce(BookingAction::Submitted {
            token,
            on_done: on_done.clone(),
        });
        assert_eq!(done.borrow().len(), 1);
        assert_eq!(state.flow.phase(), BookingPhase::Closed);

        let _ = state.reduce(BookingAction::Submitted { token, on_done });
        assert_eq!(done.borrow().len(), 1);
    }

    #[test]
    fn submit_failed_keeps_the_form_open() {
        let (state, token) = submitting();

        let (failed, on_failed) = recorder();
        let state = state.reduce(BookingAction::SubmitFailed {
            token,
            on_failed: on_failed.clone(),
        });
        assert_eq!(failed.borrow().len(), 1);
        assert_eq!(state.flow.phase(), BookingPhase::DateSelected);
        let session = state.flow.session().unwrap();
        assert_eq!(session.selected_date, Some(today()));
        assert_eq!(session.user_name, "Alice");
        assert_eq!(session.user_email, "alice@example.com");

        // Only one failure per submission.
        let _ = state.reduce(BookingAction::SubmitFailed { token, on_failed });
        assert_eq!(failed.borrow().len(), 1);
    }
}
